//! Text strength meter.

use super::Theme;
use crate::strength::StrengthReport;

const FILLED: char = '█';
const EMPTY: char = '░';

/// Renders `report` as a fixed-width bar followed by bits and rating.
///
/// With `color`, the filled part is wrapped in an ANSI colour picked
/// for the theme's background.
pub fn render_meter(report: &StrengthReport, width: usize, theme: Theme, color: bool) -> String {
    let filled = (report.meter_fraction() * width as f64).round() as usize;
    let filled = filled.min(width);

    let bar: String = std::iter::repeat(FILLED).take(filled).collect();
    let rest: String = std::iter::repeat(EMPTY).take(width - filled).collect();

    let bar = if color && filled > 0 {
        let code = match theme {
            Theme::Dark => "92",
            Theme::Light => "32",
        };
        format!("\x1b[{code}m{bar}\x1b[0m")
    } else {
        bar
    };

    format!("{bar}{rest} {} bits ({})", report.entropy_bits, report.rating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::StrengthRating;

    fn report(bits: u32) -> StrengthReport {
        StrengthReport {
            pool_size: 62,
            entropy_bits: bits,
            rating: StrengthRating::from_bits(bits),
        }
    }

    #[test]
    fn test_half_meter() {
        let line = render_meter(&report(64), 8, Theme::Light, false);
        assert_eq!(line, "████░░░░ 64 bits (Strong)");
    }

    #[test]
    fn test_empty_and_full() {
        assert!(render_meter(&report(0), 4, Theme::Dark, false).starts_with("░░░░ 0 bits"));
        assert!(render_meter(&report(300), 4, Theme::Dark, false).starts_with("████ 300 bits"));
    }

    #[test]
    fn test_color_depends_on_theme() {
        let dark = render_meter(&report(128), 4, Theme::Dark, true);
        let light = render_meter(&report(128), 4, Theme::Light, true);
        assert!(dark.starts_with("\x1b[92m"));
        assert!(light.starts_with("\x1b[32m"));
    }

    #[test]
    fn test_no_color_codes_when_empty() {
        let line = render_meter(&report(0), 4, Theme::Dark, true);
        assert!(!line.contains('\x1b'));
    }
}
