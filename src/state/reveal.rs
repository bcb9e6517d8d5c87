// One-shot reveal for the about section.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealGate {
    pub played: bool,
}

impl RevealGate {
    /// `top` is the element's top relative to the viewport. Returns `true`
    /// exactly once, on the sample where the element first comes into range.
    pub fn observe(&mut self, top: Option<f64>, viewport_height: f64, ratio: f64) -> bool {
        if self.played {
            return false;
        }
        match top {
            Some(t) if t.is_finite() && t < viewport_height * ratio => {
                self.played = true;
                true
            }
            _ => false,
        }
    }

    pub fn force(&mut self) -> bool {
        !std::mem::replace(&mut self.played, true)
    }
}
