// Scroll progress as a percentage of the scrollable distance.

pub fn scroll_progress(scroll_y: f64, viewport_height: f64, document_height: f64) -> f64 {
    if !(scroll_y.is_finite() && viewport_height.is_finite() && document_height.is_finite()) {
        return 0.0;
    }
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Inline style for the progress bar fill.
pub fn bar_style(percent: f64) -> String {
    format!("width:{:.2}%;", percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halfway_down() {
        assert_eq!(scroll_progress(500.0, 1000.0, 2000.0), 50.0);
    }

    #[test]
    fn short_document_is_zero() {
        assert_eq!(scroll_progress(0.0, 900.0, 900.0), 0.0);
        assert_eq!(scroll_progress(40.0, 900.0, 600.0), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(scroll_progress(-30.0, 1000.0, 3000.0), 0.0);
        assert_eq!(scroll_progress(2100.0, 1000.0, 3000.0), 100.0);
    }

    #[test]
    fn non_finite_input_is_zero() {
        assert_eq!(scroll_progress(f64::NAN, 1000.0, 3000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 1000.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn bar_style_uses_two_decimals() {
        assert_eq!(bar_style(33.333), "width:33.33%;");
    }
}
