//! Animation lifecycle management.
//!
//! [`AnimationRunner`] owns the single background animation loop and the
//! start/stop state machine around it. A runner is either idle or running
//! exactly one loop; `start` spawns the loop and returns immediately, `stop`
//! signals it and waits for it to exit before returning, so no further
//! console writes can race with whatever the caller prints next.
//!
//! The runner does not guard the terminal itself: while an animation is
//! running, the background task owns all writes to the sink, and callers
//! must not write to the same line until `stop` has returned.

use std::io;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::animation::spec::AnimationSpec;
use crate::console::{ConsoleSink, CrosstermGeometry, StdoutSink, TerminalGeometry};
use crate::constants::terminal::FALLBACK_COLUMNS;
use crate::error::AppError;

/// Handle to the one active animation loop.
///
/// The loop returns the sink it was given so the runner can reuse it for
/// the next run (and for the final-message write in `stop`), along with the
/// result of its console writes.
struct RunningTask<S> {
    stop_tx: watch::Sender<bool>,
    handle: JoinHandle<(S, io::Result<()>)>,
}

/// Runs single-line loading animations on a console sink.
///
/// One runner instance is meaningful per console: two runners animating the
/// same terminal line would interleave their writes unpredictably. The
/// `&mut self` receivers encode the one-caller-at-a-time discipline.
pub struct AnimationRunner<S = StdoutSink, G = CrosstermGeometry>
where
    S: ConsoleSink,
    G: TerminalGeometry,
{
    sink: Option<S>,
    geometry: G,
    task: Option<RunningTask<S>>,
}

impl AnimationRunner {
    /// Creates a runner animating the process stdout, with terminal
    /// geometry queried from crossterm.
    pub fn new() -> Self {
        Self::with_collaborators(StdoutSink::new(), CrosstermGeometry)
    }
}

impl Default for AnimationRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, G> AnimationRunner<S, G>
where
    S: ConsoleSink,
    G: TerminalGeometry,
{
    /// Creates a runner over explicit console collaborators.
    pub fn with_collaborators(sink: S, geometry: G) -> Self {
        Self {
            sink: Some(sink),
            geometry,
            task: None,
        }
    }

    /// Whether an animation loop is currently active.
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Starts an animation.
    ///
    /// Spawns the background loop and returns without waiting for any
    /// frame to be drawn. `annotation` is written to the left of the
    /// animation on every frame. When the animation is later stopped,
    /// `trailing_newline` decides whether the cursor moves to the next
    /// line or rests at column 0 of the animation line.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AnimationInProgress`] if an animation is already
    /// running. The stale loop is signalled to stop and joined before the
    /// error is returned, so the runner is idle afterwards and no
    /// background task leaks even on misuse.
    pub async fn start(
        &mut self,
        spec: &AnimationSpec,
        annotation: &str,
        trailing_newline: bool,
    ) -> Result<(), AppError> {
        if let Some(task) = self.task.take() {
            warn!("start called while an animation is already in progress; stopping stale loop");
            if let Err(e) = self.join_task(task).await {
                debug!("stale animation loop exited with error: {e}");
            }
            return Err(AppError::AnimationInProgress);
        }

        let sink = self
            .sink
            .take()
            .ok_or_else(|| AppError::animation_task_error("console sink lost by earlier failure"))?;

        debug!(
            frame_count = spec.frame_count(),
            clear_width = spec.clear_width(),
            frame_delay_ms = spec.frame_delay().as_millis() as u64,
            "starting animation"
        );

        let (stop_tx, stop_rx) = watch::channel(false);
        let handle = tokio::spawn(animation_loop(
            spec.clone(),
            annotation.to_string(),
            trailing_newline,
            sink,
            stop_rx,
        ));
        self.task = Some(RunningTask { stop_tx, handle });

        Ok(())
    }

    /// Stops the current animation and optionally writes a final message.
    ///
    /// Blocks until the background loop has observed the stop request and
    /// fully exited; once this returns, no further writes to the sink will
    /// occur. If `final_message` is non-empty the current line is erased
    /// (using the terminal column count from the geometry collaborator)
    /// and the message is written followed by a line break.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NoAnimationRunning`] if no animation is active.
    /// Console write failures from the loop or from the final-message write
    /// are propagated unmodified.
    pub async fn stop(&mut self, final_message: &str) -> Result<(), AppError> {
        let task = self.task.take().ok_or(AppError::NoAnimationRunning)?;

        debug!("stopping animation");
        self.join_task(task).await?;

        if !final_message.is_empty() {
            let columns = self.geometry.columns().unwrap_or(FALLBACK_COLUMNS) as usize;
            if let Some(sink) = self.sink.as_mut() {
                // Blank one column short of the full width: writing an
                // entire row would wrap the cursor onto the next line.
                sink.write_str(&format!("\r{}", " ".repeat(columns.saturating_sub(1))))?;
                sink.write_str(&format!("\r{final_message}\n"))?;
                sink.flush()?;
            }
        }

        Ok(())
    }

    /// Signals the loop, waits for it to exit and recovers the sink.
    ///
    /// The sink is restored before the loop's write result is inspected,
    /// so an I/O failure inside the loop does not leave the runner without
    /// a sink for subsequent runs.
    async fn join_task(&mut self, task: RunningTask<S>) -> Result<(), AppError> {
        // The receiver may already be gone if the loop exited on its own;
        // the join below still drains it either way.
        let _ = task.stop_tx.send(true);

        let (sink, result) = task.handle.await?;
        self.sink = Some(sink);
        result?;

        Ok(())
    }
}

/// Background loop entry point. Wraps [`run_cycles`] so the sink is handed
/// back to the runner even when a write fails mid-animation.
async fn animation_loop<S: ConsoleSink>(
    spec: AnimationSpec,
    annotation: String,
    trailing_newline: bool,
    mut sink: S,
    mut stop_rx: watch::Receiver<bool>,
) -> (S, io::Result<()>) {
    let result = run_cycles(&spec, &annotation, trailing_newline, &mut sink, &mut stop_rx).await;
    (sink, result)
}

/// Draws animation cycles until the stop signal arrives, then writes the
/// exit sequence.
async fn run_cycles<S: ConsoleSink>(
    spec: &AnimationSpec,
    annotation: &str,
    trailing_newline: bool,
    sink: &mut S,
    stop_rx: &mut watch::Receiver<bool>,
) -> io::Result<()> {
    // Resets the line to a known blank state before each cycle, so frames
    // shorter than the previous cycle's widest never leave stale characters
    // ("jitter") on the line.
    let clear_str = format!("\r{}{}", annotation, " ".repeat(spec.clear_width()));

    'animating: while !*stop_rx.borrow() {
        sink.write_str(&clear_str)?;
        sink.flush()?;

        for index in 0..spec.frame_count() {
            sink.write_str(&format!("\r{}{}", annotation, spec.render_frame(index)))?;
            sink.flush()?;

            tokio::select! {
                _ = sleep(spec.frame_delay()) => {}
                // Fires on the stop signal, or with an error once the
                // runner (and with it the sender) has been dropped; both
                // end the animation mid-cycle without finishing the pass.
                _ = stop_rx.changed() => break 'animating,
            }
        }
    }

    // With no trailing newline the cursor rests at column 0 of the same
    // line, leaving final-line composition to the caller.
    sink.write_str(if trailing_newline { "\n" } else { "\r" })?;
    sink.flush()?;

    Ok(())
}
