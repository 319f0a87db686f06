use std::future::Future;
use std::io::{IsTerminal, Write};
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use crate::config::constants::spinner_interval;
use crate::enums::pipeline_stage::PipelineStage;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Stderr progress line for one pipeline stage, with a live elapsed-time counter.
/// Nothing is animated when stderr is not a terminal; only the outcome line is printed.
pub struct AnimatedLogger {
    stage: PipelineStage,
    started_at: Instant,
    stop_sender: Option<oneshot::Sender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn start(stage: PipelineStage, message: &str) -> Self {
        let started_at = Instant::now();
        let mut logger = Self {
            stage,
            started_at,
            stop_sender: None,
            task_handle: None,
        };

        if !std::io::stderr().is_terminal() {
            return logger;
        }

        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let message = message.to_string();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(spinner_interval());

            for frame in FRAMES.iter().cycle() {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{}", progress_line(frame, &message, started_at.elapsed()));
                        let _ = std::io::stderr().flush();
                    }
                    _ = &mut stop_rx => break,
                }
            }
        });

        logger.stop_sender = Some(stop_tx);
        logger.task_handle = Some(handle);
        logger
    }

    /// Awaits `work` behind the spinner, then prints `done(&value)` or the stage failure.
    pub async fn track<T, E, F>(
        stage: PipelineStage,
        message: &str,
        work: F,
        done: impl FnOnce(&T) -> String,
    ) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
    {
        let mut logger = Self::start(stage, message);
        let result = work.await;

        match &result {
            Ok(value) => logger.stop(&done(value)).await,
            Err(_) => logger.fail().await,
        }
        result
    }

    pub async fn stop(&mut self, final_message: &str) {
        let elapsed = self.halt().await;
        eprintln!("{}", outcome_line(true, final_message, elapsed));
    }

    pub async fn fail(&mut self) {
        let elapsed = self.halt().await;
        eprintln!("{}", outcome_line(false, &format!("{} failed", self.stage), elapsed));
    }

    async fn halt(&mut self) -> Duration {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
            eprint!("\r\x1b[K");
        }
        self.started_at.elapsed()
    }
}

fn progress_line(frame: &str, message: &str, elapsed: Duration) -> String {
    format!("{} {} ({:.1}s) ", frame, message, elapsed.as_secs_f64())
}

fn outcome_line(succeeded: bool, message: &str, elapsed: Duration) -> String {
    let mark = if succeeded { "✅" } else { "❌" };
    format!("{} {} in {:.1}s", mark, message, elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_carry_elapsed_seconds() {
        let elapsed = Duration::from_millis(2340);

        assert_eq!(progress_line("⠋", "📥 Fetching repository", elapsed), "⠋ 📥 Fetching repository (2.3s) ");
        assert_eq!(outcome_line(true, "Fetched octo/demo", elapsed), "✅ Fetched octo/demo in 2.3s");
        assert_eq!(
            outcome_line(false, &format!("{} failed", PipelineStage::Model), elapsed),
            "❌ model analysis failed in 2.3s"
        );
    }

    #[tokio::test]
    async fn track_passes_the_result_through() {
        let ok: Result<u32, String> = AnimatedLogger::track(
            PipelineStage::Fetch,
            "fetching",
            async { Ok(7) },
            |value| format!("got {}", value),
        ).await;
        assert_eq!(ok, Ok(7));

        let err: Result<u32, String> = AnimatedLogger::track(
            PipelineStage::Model,
            "waiting",
            async { Err("quota".to_string()) },
            |_| unreachable!(),
        ).await;
        assert_eq!(err, Err("quota".to_string()));
    }
}
