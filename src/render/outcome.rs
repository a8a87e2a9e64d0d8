use crate::render::error::RenderError;
/// Result of rendering one lead at the host boundary.
///
/// Malformed input never bubbles up past here: it becomes a fallback that the
/// host shows in place of the chart until new input arrives.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOutcome<T> {
    Ready(T),
    Fallback(Fallback),
}
#[derive(Clone, Debug, PartialEq)]
pub struct Fallback {
    pub lead: String,
    pub error: RenderError,
}
impl Fallback {
    pub fn message(&self) -> String {
        self.error.fallback_message(&self.lead)
    }
}
impl<T> RenderOutcome<T> {
    pub fn from_result(lead: &str, result: Result<T, RenderError>) -> Self {
        match result {
            Ok(value) => RenderOutcome::Ready(value),
            Err(error) => {
                log::debug!("lead {lead} falls back: {error}");
                RenderOutcome::Fallback(Fallback {
                    lead: lead.to_string(),
                    error,
                })
            }
        }
    }
    pub fn ready(&self) -> Option<&T> {
        match self {
            RenderOutcome::Ready(value) => Some(value),
            RenderOutcome::Fallback(_) => None,
        }
    }
    pub fn fallback(&self) -> Option<&Fallback> {
        match self {
            RenderOutcome::Ready(_) => None,
            RenderOutcome::Fallback(fallback) => Some(fallback),
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn fallback_messages_name_the_lead() {
        let outcome: RenderOutcome<()> = RenderOutcome::from_result("V2", Err(RenderError::NoSamples));
        assert_eq!(
            outcome.fallback().unwrap().message(),
            "No ECG data available for lead V2"
        );
        let outcome: RenderOutcome<()> = RenderOutcome::from_result(
            "V2",
            Err(RenderError::InvalidSamplingRate { fs: 0.0 }),
        );
        assert_eq!(outcome.fallback().unwrap().message(), "Invalid sampling frequency");
        assert!(outcome.ready().is_none());
    }
}
