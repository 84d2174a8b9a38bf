/// A transformation style offered to the user. `effect` is the key the
/// service understands; `symbol` and `label` are display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mood {
    pub symbol: &'static str,
    pub effect: &'static str,
    pub label: &'static str,
}

/// The fixed catalog. Order here is on-screen order.
pub const MOODS: [Mood; 10] = [
    Mood {
        symbol: "🌙",
        effect: "slow_reverb",
        label: "Dreamy",
    },
    Mood {
        symbol: "🎉",
        effect: "energetic",
        label: "Energetic",
    },
    Mood {
        symbol: "🖤",
        effect: "dark",
        label: "Dark",
    },
    Mood {
        symbol: "💖",
        effect: "cute",
        label: "Cute",
    },
    Mood {
        symbol: "😎",
        effect: "cool",
        label: "Cool",
    },
    Mood {
        symbol: "🌈",
        effect: "happy",
        label: "Happy",
    },
    Mood {
        symbol: "🔥",
        effect: "intense",
        label: "Intense",
    },
    Mood {
        symbol: "🎶",
        effect: "melodic",
        label: "Melodic",
    },
    Mood {
        symbol: "🌿",
        effect: "chill",
        label: "Chill",
    },
    Mood {
        symbol: "💤",
        effect: "sleepy",
        label: "Sleepy",
    },
];

pub fn mood_at(index: usize) -> Option<&'static Mood> {
    MOODS.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_ten_distinct_effects() {
        let mut effects: Vec<_> = MOODS.iter().map(|m| m.effect).collect();
        effects.sort_unstable();
        effects.dedup();
        assert_eq!(effects.len(), 10);
    }

    #[test]
    fn mood_at_follows_catalog_order() {
        assert_eq!(mood_at(0).unwrap().effect, "slow_reverb");
        assert_eq!(mood_at(9).unwrap().effect, "sleepy");
        assert!(mood_at(10).is_none());
    }
}
