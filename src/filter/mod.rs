use crate::color::Rgbw;
use crate::gamma::gamma_correct;

pub(crate) trait Filter {
    /// Apply the filter to a frame
    fn apply(&self, frame: &mut [Rgbw]);
}

/// Perceptual brightness correction
#[derive(Debug, Clone, Copy)]
pub(crate) struct GammaFilter;

impl Filter for GammaFilter {
    fn apply(&self, frame: &mut [Rgbw]) {
        for pixel in frame.iter_mut() {
            *pixel = gamma_correct(*pixel);
        }
    }
}

/// Filter processor - applies post-processing to frames
///
/// Modes keep rendering into their own buffer; filters are applied to a
/// copy so that corrections never feed back into the next blend.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FilterProcessor {
    gamma: Option<GammaFilter>,
}

impl FilterProcessor {
    pub(crate) const fn new(gamma: bool) -> Self {
        Self {
            gamma: if gamma { Some(GammaFilter) } else { None },
        }
    }

    /// Copy `source` into `target` and apply all filters to it
    pub(crate) fn process(&self, source: &[Rgbw], target: &mut [Rgbw]) {
        target.copy_from_slice(source);
        if let Some(gamma) = &self.gamma {
            gamma.apply(target);
        }
    }
}
