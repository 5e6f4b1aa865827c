//! `Weekday` — day-of-week enum.

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7). Saturday and Sunday
/// form the weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Monday through Sunday.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// From the ordinal 1 (Monday) ..= 7 (Sunday); `None` otherwise.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        n.checked_sub(1)
            .and_then(|i| Self::ALL.get(usize::from(i)))
            .copied()
    }

    /// 1 (Monday) ..= 7 (Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Position in a Sunday-first week (Sunday = 0 … Saturday = 6).
    pub fn sunday_index(&self) -> u8 {
        self.ordinal() % 7
    }

    /// Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Three-letter label, e.g. `"Mon"`.
    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }

    /// Full English name.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(w: chrono::Weekday) -> Self {
        Self::ALL[w.num_days_from_monday() as usize]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekend_positions_in_sunday_first_week() {
        let weekend: Vec<u8> = Weekday::ALL
            .iter()
            .filter(|w| w.is_weekend())
            .map(Weekday::sunday_index)
            .collect();
        assert_eq!(weekend, vec![6, 0]);
    }

    #[test]
    fn ordinals() {
        for (i, w) in Weekday::ALL.iter().enumerate() {
            assert_eq!(usize::from(w.ordinal()), i + 1);
            assert_eq!(Weekday::from_ordinal(w.ordinal()), Some(*w));
        }
        assert!(Weekday::from_ordinal(0).is_none());
        assert!(Weekday::from_ordinal(8).is_none());
    }

    #[test]
    fn names() {
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
        assert_eq!(Weekday::Saturday.short_name(), "Sat");
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
    }
}
