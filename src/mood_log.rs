use crate::clock::LocalTime;
use crate::theme::Theme;

/// One line of the mood log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MoodLogEntry {
    pub theme: Theme,
    pub glyph: &'static str,
    pub label: &'static str,
    pub time: LocalTime,
}

/// Append-only record of mood selections for this page load.
#[derive(Debug, Default)]
pub struct MoodLog {
    entries: Vec<MoodLogEntry>,
}

impl MoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, theme: Theme, time: LocalTime) -> &MoodLogEntry {
        self.entries.push(MoodLogEntry {
            theme,
            glyph: theme.glyph(),
            label: theme.label(),
            time,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[MoodLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order_and_table_values() {
        let mut log = MoodLog::new();
        let t = LocalTime::new(14, 3);
        log.append(Theme::Productive, t);
        log.append(Theme::Chaos, t);
        log.append(Theme::Chill, t);
        let pairs: Vec<_> = log.entries().iter().map(|e| (e.glyph, e.label)).collect();
        assert_eq!(pairs, vec![("😎", "Productive"), ("😈", "Chaos"), ("😌", "Chill")]);
        assert_eq!(log.entries()[0].time.to_string(), "14:03");
    }

    #[test]
    fn test_no_eviction() {
        let mut log = MoodLog::new();
        for _ in 0..1_000 {
            log.append(Theme::Chill, LocalTime::new(0, 0));
        }
        assert_eq!(log.len(), 1_000);
    }
}
