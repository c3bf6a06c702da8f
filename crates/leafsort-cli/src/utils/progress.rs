use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use leafsort::engine::progress::{Progress, ProgressCallback};
use std::time::Duration;

const SPINNER_TICK: Duration = Duration::from_millis(80);

fn phase_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn lipid_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg:<20} [{bar:40.cyan/blue}] {pos}/{len} lipids")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-")
}

/// Renders classification progress as a single line on standard error.
///
/// Each phase shows a spinner that turns into a bar counting lipids once the
/// number of lipids is known; the line is cleared when the phase ends.
pub struct CliProgressHandler {
    bar: ProgressBar,
}

impl CliProgressHandler {
    /// Creates a handler drawing to standard error, or drawing nothing if `visible` is false.
    pub fn new(visible: bool) -> Self {
        let target = if visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        Self {
            bar: ProgressBar::with_draw_target(None, target),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let bar = self.bar.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::PhaseStart { name } => {
                bar.reset();
                bar.set_style(phase_style());
                bar.set_message(name);
                bar.enable_steady_tick(SPINNER_TICK);
            }
            Progress::TaskStart { total_steps } => {
                bar.disable_steady_tick();
                bar.set_style(lipid_style());
                bar.set_length(total_steps);
                bar.set_position(0);
            }
            Progress::TaskIncrement => bar.inc(1),
            Progress::TaskFinish => {}
            Progress::PhaseFinish => {
                bar.disable_steady_tick();
                bar.finish_and_clear();
            }
            Progress::Message(msg) => bar.println(format!("  {}", msg)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn lipids_are_counted_within_a_phase() {
        let handler = CliProgressHandler::new(false);
        let callback = handler.get_callback();

        callback(Progress::PhaseStart {
            name: "Classifying lipids",
        });
        assert_eq!(handler.bar.message(), "Classifying lipids");
        assert!(!handler.bar.is_finished());

        callback(Progress::TaskStart { total_steps: 10 });
        callback(Progress::TaskIncrement);
        callback(Progress::TaskIncrement);
        assert_eq!(handler.bar.length(), Some(10));
        assert_eq!(handler.bar.position(), 2);

        callback(Progress::TaskFinish);
        callback(Progress::PhaseFinish);
        assert!(handler.bar.is_finished());
    }

    #[test]
    fn next_phase_starts_from_zero() {
        let handler = CliProgressHandler::new(false);
        let callback = handler.get_callback();

        callback(Progress::PhaseStart {
            name: "Resolving selections",
        });
        callback(Progress::TaskStart { total_steps: 3 });
        callback(Progress::TaskIncrement);
        callback(Progress::PhaseFinish);

        callback(Progress::PhaseStart {
            name: "Classifying lipids",
        });
        assert_eq!(handler.bar.position(), 0);
        assert_eq!(handler.bar.message(), "Classifying lipids");
    }

    #[test]
    fn callback_can_be_sent_to_another_thread() {
        let handler = CliProgressHandler::new(false);
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::PhaseStart { name: "Thread" });
            callback(Progress::Message("Classified 0 lipids.".to_string()));
            callback(Progress::PhaseFinish);
        })
        .join()
        .unwrap();

        assert!(handler.bar.is_finished());
    }
}
