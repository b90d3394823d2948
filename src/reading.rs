use clap::{Args, ValueEnum};
use northchild_engine::error::AppError;
use northchild_engine::fate::{
    display_name, tables::FATES, AnimalPoints, Augments, BatchEntry, BatchImporter, FateEngine,
    FateReading, FateVariant,
};
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Default)]
pub struct ReadArgs {
    /// Points placed on the wolf (0-4)
    #[arg(long, default_value_t = 0)]
    pub wolf: i32,
    /// Points placed on the orca (0-4)
    #[arg(long, default_value_t = 0)]
    pub orca: i32,
    /// Points placed on the serpent (0-4)
    #[arg(long, default_value_t = 0)]
    pub serpent: i32,
    /// Points placed on the raven (0-4)
    #[arg(long, default_value_t = 0)]
    pub raven: i32,
    /// Points placed on the owl (0-4)
    #[arg(long, default_value_t = 0)]
    pub owl: i32,
    /// Points placed on the eagle (0-4)
    #[arg(long, default_value_t = 0)]
    pub eagle: i32,
    /// Points placed on the elk (0-4)
    #[arg(long, default_value_t = 0)]
    pub elk: i32,
    /// Points placed on the bear (0-4)
    #[arg(long, default_value_t = 0)]
    pub bear: i32,
    /// Highflame augments placed (a full stack of 5 selects highflame names)
    #[arg(long, default_value_t = 0)]
    pub highflame: u8,
    /// Gravesong augments placed (a full stack of 5 selects gravesong names)
    #[arg(long, default_value_t = 0)]
    pub gravesong: u8,
    /// Print the full reading as JSON
    #[arg(long)]
    pub json: bool,
}

impl ReadArgs {
    pub fn allocation(&self) -> (AnimalPoints, Augments) {
        let points = AnimalPoints {
            wolf: self.wolf,
            orca: self.orca,
            serpent: self.serpent,
            raven: self.raven,
            owl: self.owl,
            eagle: self.eagle,
            elk: self.elk,
            bear: self.bear,
        };
        (points, Augments::new(self.highflame, self.gravesong))
    }
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// CSV sheet with label, animal, highflame and gravesong columns
    #[arg(long)]
    pub input: PathBuf,
    /// Print every reading as a JSON array
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Default)]
pub struct FatesArgs {
    /// Naming variant used for titles and asset folders
    #[arg(long, value_enum, default_value_t = VariantArg::Base)]
    pub variant: VariantArg,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VariantArg {
    #[default]
    Base,
    Highflame,
    Gravesong,
}

impl From<VariantArg> for FateVariant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Base => FateVariant::Base,
            VariantArg::Highflame => FateVariant::Highflame,
            VariantArg::Gravesong => FateVariant::Gravesong,
        }
    }
}

pub fn run_read(engine: &FateEngine, args: ReadArgs) -> Result<(), AppError> {
    let (points, augments) = args.allocation();
    let reading = engine.read(&points, augments);
    info!(
        valid = reading.is_valid,
        winner = reading.winner.id,
        "reading computed"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reading)?);
    } else {
        print!("{}", render_reading(engine, &points, &reading));
    }
    Ok(())
}

pub fn run_batch(engine: &FateEngine, args: BatchArgs) -> Result<(), AppError> {
    let entries = BatchImporter::from_path(&args.input)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", render_batch(engine, &entries));
    }
    Ok(())
}

pub fn run_fates(engine: &FateEngine, args: FatesArgs) -> Result<(), AppError> {
    print!("{}", render_fates(engine, args.variant.into()));
    Ok(())
}

pub fn render_reading(
    engine: &FateEngine,
    points: &AnimalPoints,
    reading: &FateReading,
) -> String {
    let mut out = String::new();
    let allocation: Vec<String> = points
        .iter()
        .map(|(animal, value)| format!("{animal} {value}"))
        .collect();

    let _ = writeln!(out, "Northchild reading ({} names)", reading.variant);
    let _ = writeln!(out, "Allocation: {}", allocation.join(" | "));

    if reading.is_valid {
        let _ = writeln!(out, "Status: valid");
    } else {
        let _ = writeln!(out, "Status: invalid build");
        for message in reading.error_messages() {
            let _ = writeln!(out, "  - {message}");
        }
    }

    let leaders: Vec<String> = reading
        .top_axes_raw
        .iter()
        .take(3)
        .map(|entry| format!("{} {:.3}", entry.axis, entry.score))
        .collect();
    let _ = writeln!(out, "Leading axes: {}", leaders.join(", "));

    let softcap = reading.softcap();
    let _ = writeln!(
        out,
        "Softcap: top {:.3} | second {:.3} | closeness {:.3} | damp {:.3}{}",
        softcap.top_raw,
        softcap.second_raw,
        softcap.closeness,
        softcap.damp_factor,
        if softcap.is_engaged() { " (engaged)" } else { "" }
    );

    for (label, summary) in [("Winner", &reading.winner), ("Runner-up", &reading.runner_up)] {
        let title = if summary.display_name == summary.base_name {
            summary.display_name.clone()
        } else {
            format!("{} ({})", summary.display_name, summary.base_name)
        };
        let _ = writeln!(
            out,
            "{label}: {title} [#{:02}] score {:.3} composite {:.3}",
            summary.id, summary.score, summary.composite
        );
    }
    let _ = writeln!(out, "Asset: {}", engine.winner_asset(reading));

    out
}

pub fn render_batch(engine: &FateEngine, entries: &[BatchEntry]) -> String {
    let mut out = String::new();
    let valid = entries.iter().filter(|entry| entry.reading.is_valid).count();
    let _ = writeln!(
        out,
        "Evaluated {} build(s): {} valid, {} invalid",
        entries.len(),
        valid,
        entries.len() - valid
    );

    for entry in entries {
        let reading = &entry.reading;
        if reading.is_valid {
            let _ = writeln!(
                out,
                "- {}: {} [#{:02}] score {:.3} | runner-up {} | {}",
                entry.label,
                reading.winner.display_name,
                reading.winner.id,
                reading.winner.score,
                reading.runner_up.display_name,
                engine.winner_asset(reading)
            );
        } else {
            let _ = writeln!(
                out,
                "- {}: invalid build ({})",
                entry.label,
                reading.error_messages().join(" ")
            );
        }
    }

    out
}

pub fn render_fates(engine: &FateEngine, variant: FateVariant) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Fates ({variant} names)");
    for def in FATES.iter() {
        let _ = writeln!(
            out,
            "#{:02} {:<20} {} + {} -> {}",
            def.id,
            display_name(def, variant),
            def.axis_a,
            def.axis_b,
            engine.assets().path_for(def.id, variant)
        );
    }
    out
}
