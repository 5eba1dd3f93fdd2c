//! Deterministic project colors.
//!
//! A project name is hashed with the browser-side string hash
//! (`hash = charCode + (hash << 5) - hash` over UTF-16 code units, the
//! shift done in 32-bit two's complement) and the absolute value picks a
//! palette slot. The same name always lands on the same color, so the
//! calendar and timeline agree with each other and with any UI that uses
//! the same formula.

/// A fixed, ordered set of color tokens with a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    entries: &'static [&'static str],
    fallback: &'static str,
}

const CALENDAR_COLORS: &[&str] = &[
    "bg-indigo-500",
    "bg-green-500",
    "bg-pink-500",
    "bg-yellow-500",
    "bg-blue-500",
    "bg-purple-500",
    "bg-orange-500",
];

const TIMELINE_COLORS: &[&str] = &[
    "bg-purple-600",
    "bg-emerald-500",
    "bg-yellow-500",
    "bg-zinc-500",
    "bg-pink-600",
];

impl Palette {
    /// Month calendar dots and bars. Unlabeled projects get the first entry.
    pub const CALENDAR: Palette = Palette::new(CALENDAR_COLORS, "bg-indigo-500");

    /// Timeline bars. Unlabeled projects get a dedicated orange.
    pub const TIMELINE: Palette = Palette::new(TIMELINE_COLORS, "bg-orange-600");

    /// Creates a palette.
    pub const fn new(entries: &'static [&'static str], fallback: &'static str) -> Self {
        Self { entries, fallback }
    }

    /// Number of hashed entries (the fallback is not counted).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no hashed entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Default entry for blank labels.
    pub fn fallback(&self) -> &'static str {
        self.fallback
    }

    /// Palette slot for a project name; `None` for an empty name or an
    /// empty palette. Whitespace-only names hash like any other string.
    pub fn index_for(&self, project: &str) -> Option<usize> {
        if project.is_empty() || self.entries.is_empty() {
            return None;
        }
        let len = self.entries.len() as u64;
        Some((project_hash(project).unsigned_abs() % len) as usize)
    }

    /// Color token for a project name.
    pub fn color_for(&self, project: &str) -> &'static str {
        self.index_for(project)
            .map_or(self.fallback, |i| self.entries[i])
    }

    /// Color token for an optional label.
    pub fn color_for_label(&self, project: Option<&str>) -> &'static str {
        project.map_or(self.fallback, |p| self.color_for(p))
    }
}

/// String hash matching the UI's `charCodeAt` loop.
///
/// Only the shift operand is truncated to 32 bits, as in the browser;
/// the running sum is carried exactly (it stays well inside `i64` for any
/// realistic name).
pub fn project_hash(name: &str) -> i64 {
    name.encode_utf16().fold(0i64, |hash, unit| {
        let shifted = i64::from((hash as i32).wrapping_shl(5));
        i64::from(unit)
            .wrapping_add(shifted)
            .wrapping_sub(hash)
    })
}

/// Calendar color for a project name.
pub fn project_color(project: &str) -> &'static str {
    Palette::CALENDAR.color_for(project)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_known_values() {
        assert_eq!(project_hash(""), 0);
        assert_eq!(project_hash("a"), 97);
        // 98 + (97 << 5) - 97
        assert_eq!(project_hash("ab"), 3105);
    }

    #[test]
    fn test_known_palette_slots() {
        // 97 % 7 = 6, 3105 % 7 = 4
        assert_eq!(Palette::CALENDAR.index_for("a"), Some(6));
        assert_eq!(project_color("a"), "bg-orange-500");
        assert_eq!(project_color("ab"), "bg-blue-500");
        // 97 % 5 = 2
        assert_eq!(Palette::TIMELINE.color_for("a"), "bg-yellow-500");
    }

    #[test]
    fn test_deterministic() {
        for name in ["Apollo", "Project Phoenix", "데이터 플랫폼", "x"] {
            assert_eq!(
                Palette::CALENDAR.index_for(name),
                Palette::CALENDAR.index_for(name)
            );
            assert_eq!(project_color(name), project_color(&name.to_string()));
        }
    }

    #[test]
    fn test_blank_label_uses_fallback() {
        assert_eq!(Palette::CALENDAR.color_for(""), "bg-indigo-500");
        assert_eq!(Palette::TIMELINE.color_for(""), "bg-orange-600");
        assert_eq!(Palette::TIMELINE.color_for_label(None), "bg-orange-600");
        assert_eq!(Palette::CALENDAR.index_for(""), None);
    }

    #[test]
    fn test_whitespace_name_is_hashed() {
        // 32 -> 1024 -> 31776
        assert_eq!(project_hash("   "), 31776);
        // 31776 % 7 = 3, 31776 % 5 = 1
        assert_eq!(Palette::CALENDAR.index_for("   "), Some(3));
        assert_eq!(project_color("   "), "bg-yellow-500");
        assert_eq!(Palette::TIMELINE.color_for("   "), "bg-emerald-500");
    }

    #[test]
    fn test_long_names_stay_in_range() {
        let name = "Z".repeat(10_000);
        let idx = Palette::TIMELINE.index_for(&name).unwrap();
        assert!(idx < Palette::TIMELINE.len());
    }

    #[test]
    fn test_empty_palette() {
        let p = Palette::new(&[], "bg-gray-500");
        assert!(p.is_empty());
        assert_eq!(p.color_for("Apollo"), "bg-gray-500");
    }
}
