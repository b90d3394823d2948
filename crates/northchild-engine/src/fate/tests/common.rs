use crate::fate::domain::{Animal, AnimalPoints, MAX_POINTS_PER_ANIMAL, TOTAL_POINTS};

/// wolf 4, orca 4, elk 4, raven 3: Kinship and Voyage tie at the top.
pub(super) fn shieldwall() -> AnimalPoints {
    AnimalPoints {
        wolf: 4,
        orca: 4,
        elk: 4,
        raven: 3,
        ..AnimalPoints::default()
    }
}

/// Power leads 6 to 4, below the softcap threshold.
pub(super) fn open_hand() -> AnimalPoints {
    AnimalPoints {
        wolf: 4,
        bear: 4,
        raven: 3,
        owl: 2,
        eagle: 2,
        ..AnimalPoints::default()
    }
}

/// Law alone leads 6 to Insight's 5.5.
pub(super) fn law_spike() -> AnimalPoints {
    AnimalPoints {
        wolf: 4,
        eagle: 4,
        owl: 4,
        serpent: 3,
        ..AnimalPoints::default()
    }
}

/// Every allocation that satisfies the budget and per-animal cap.
pub(super) fn all_valid_allocations() -> Vec<AnimalPoints> {
    fn fill(index: usize, remaining: i32, current: &mut AnimalPoints, out: &mut Vec<AnimalPoints>) {
        if index == Animal::ALL.len() {
            if remaining == 0 {
                out.push(*current);
            }
            return;
        }
        let slots_left = (Animal::ALL.len() - index - 1) as i32;
        for points in 0..=MAX_POINTS_PER_ANIMAL.min(remaining) {
            if remaining - points > slots_left * MAX_POINTS_PER_ANIMAL {
                continue;
            }
            current.set(Animal::ALL[index], points);
            fill(index + 1, remaining - points, current, out);
        }
        current.set(Animal::ALL[index], 0);
    }

    let mut out = Vec::new();
    fill(0, TOTAL_POINTS, &mut AnimalPoints::default(), &mut out);
    out
}
