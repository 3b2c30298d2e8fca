use loadline::animation::{AnimationSpec, DOT_LINE, SPINNER};
use loadline::constants::terminal::FALLBACK_COLUMNS;
use loadline::error::AppError;
use loadline::runner::AnimationRunner;
use loadline::testing_utils::{FixedGeometry, RecordingSink, UnknownGeometry};
use std::time::Duration;
use tokio::time::sleep;

const TEST_COLUMNS: u16 = 40;

fn fast_spinner() -> AnimationSpec {
    SPINNER.clone().with_frame_delay(Duration::from_millis(2))
}

fn test_runner() -> (AnimationRunner<RecordingSink, FixedGeometry>, loadline::testing_utils::RecordedOutput) {
    let sink = RecordingSink::new();
    let output = sink.handle();
    let runner = AnimationRunner::with_collaborators(sink, FixedGeometry(TEST_COLUMNS));
    (runner, output)
}

/// Calling start twice without an intervening stop fails, leaves the runner
/// idle and leaks no background task
#[tokio::test]
async fn test_double_start_fails_and_reaps_the_stale_loop() {
    let (mut runner, output) = test_runner();

    runner.start(&fast_spinner(), "", false).await.unwrap();
    let result = runner.start(&fast_spinner(), "", false).await;

    assert!(matches!(result, Err(AppError::AnimationInProgress)));
    assert!(!runner.is_running());

    // No further console writes after a short grace period: the stale loop
    // really exited rather than being abandoned
    let writes_at_error = output.write_count();
    sleep(Duration::from_millis(30)).await;
    assert_eq!(output.write_count(), writes_at_error);
}

/// Stop with no active run fails and leaves state idle
#[tokio::test]
async fn test_stop_while_idle_fails() {
    let (mut runner, output) = test_runner();

    let result = runner.stop("done").await;

    assert!(matches!(result, Err(AppError::NoAnimationRunning)));
    assert!(!runner.is_running());
    // A failed stop writes nothing, not even the final message
    assert_eq!(output.write_count(), 0);
}

/// Immediately after stop returns, no further writes occur (race-free join)
#[tokio::test]
async fn test_stop_is_blocking() {
    let (mut runner, output) = test_runner();

    runner.start(&fast_spinner(), "Working ", true).await.unwrap();
    sleep(Duration::from_millis(15)).await;
    runner.stop("").await.unwrap();

    let writes_at_return = output.write_count();
    sleep(Duration::from_millis(30)).await;
    assert_eq!(output.write_count(), writes_at_return);
}

/// Start(spinner, annotation "Loading ", no trailing newline), run at least
/// three full cycles, Stop("done"): the output ends in a line-clear, the
/// literal final message and a line break, with no spinner glyph after
#[tokio::test]
async fn test_spinner_end_to_end_with_final_message() {
    let (mut runner, output) = test_runner();
    let spec = fast_spinner();
    let cycle = spec.frame_delay() * spec.frame_count() as u32;

    runner.start(&spec, "Loading ", false).await.unwrap();
    sleep(cycle * 3 + Duration::from_millis(20)).await;
    runner.stop("done").await.unwrap();

    let writes = output.writes();
    assert!(writes.len() >= 3);

    // Tail sequence: animation exit (bare carriage return, since no
    // trailing newline was requested), full-width line clear, message
    assert_eq!(writes[writes.len() - 3], "\r");
    assert_eq!(
        writes[writes.len() - 2],
        format!("\r{}", " ".repeat(TEST_COLUMNS as usize - 1))
    );
    assert_eq!(writes[writes.len() - 1], "\rdone\n");

    // Frames carried the annotation on every redraw
    assert!(writes[0].starts_with("\rLoading "));
    assert!(output.combined().contains("\rLoading /"));

    // Nothing follows the final message
    let writes_at_return = output.write_count();
    sleep(Duration::from_millis(30)).await;
    assert_eq!(output.write_count(), writes_at_return);
}

/// Start(dot-line) then immediate Stop("") ends with a bare carriage-return:
/// no message, no line break
#[tokio::test]
async fn test_immediate_stop_with_empty_message() {
    let (mut runner, output) = test_runner();
    let spec = DOT_LINE.clone().with_frame_delay(Duration::from_millis(2));

    runner.start(&spec, "", false).await.unwrap();
    runner.stop("").await.unwrap();

    let combined = output.combined();
    assert!(combined.ends_with('\r'));
    assert!(!combined.contains('\n'));
    assert!(!combined.contains("done"));
}

/// A stop arriving mid-frame cancels the rest of the cycle: the very next
/// write after the signal is observed is the exit sequence
#[tokio::test]
async fn test_mid_frame_stop_writes_no_further_frames() {
    let (mut runner, output) = test_runner();
    // Long enough that the loop is parked in the first frame's delay when
    // the stop request lands
    let spec = SPINNER.clone().with_frame_delay(Duration::from_millis(150));

    runner.start(&spec, "", false).await.unwrap();
    sleep(Duration::from_millis(20)).await;
    runner.stop("").await.unwrap();

    // Exactly: cycle-opening clear string, first frame, exit sequence
    let writes = output.writes();
    assert_eq!(writes, vec!["\r ".to_string(), "\r/".to_string(), "\r".to_string()]);
}

/// A full cycle redraws from scratch: clear string first, then every frame
/// in order, then the clear string again for the next cycle
#[tokio::test]
async fn test_cycle_structure_redraws_from_scratch() {
    let (mut runner, output) = test_runner();
    let spec = fast_spinner();
    let cycle = spec.frame_delay() * spec.frame_count() as u32;

    runner.start(&spec, "", true).await.unwrap();
    sleep(cycle * 3).await;
    runner.stop("").await.unwrap();

    let writes = output.writes();
    assert!(writes.len() > spec.frame_count() + 2);

    // Spinner clear width is 1, so the cycle opens with a single blank
    assert_eq!(writes[0], "\r ");
    assert_eq!(writes[1], "\r/");
    assert_eq!(writes[2], "\r-");
    assert_eq!(writes[3], "\r\\");
    assert_eq!(writes[4], "\r|");
    assert_eq!(writes[5], "\r");
    // Next cycle starts with the clear string again
    assert_eq!(writes[6], "\r ");
}

/// Requesting a trailing newline moves the cursor to the next line on stop
#[tokio::test]
async fn test_trailing_newline_on_stop() {
    let (mut runner, output) = test_runner();

    runner.start(&fast_spinner(), "", true).await.unwrap();
    sleep(Duration::from_millis(10)).await;
    runner.stop("").await.unwrap();

    assert!(output.combined().ends_with('\n'));
}

/// When terminal geometry is unavailable, the final-message line clear
/// falls back to a fixed generous width
#[tokio::test]
async fn test_final_message_fallback_width() {
    let sink = RecordingSink::new();
    let output = sink.handle();
    let mut runner = AnimationRunner::with_collaborators(sink, UnknownGeometry);

    runner.start(&fast_spinner(), "", false).await.unwrap();
    sleep(Duration::from_millis(10)).await;
    runner.stop("finished").await.unwrap();

    let writes = output.writes();
    assert_eq!(
        writes[writes.len() - 2],
        format!("\r{}", " ".repeat(FALLBACK_COLUMNS as usize - 1))
    );
    assert_eq!(writes[writes.len() - 1], "\rfinished\n");
}

/// Dropping the runner without calling stop still terminates the loop
#[tokio::test]
async fn test_dropping_the_runner_terminates_the_loop() {
    let sink = RecordingSink::new();
    let output = sink.handle();
    let mut runner = AnimationRunner::with_collaborators(sink, FixedGeometry(TEST_COLUMNS));

    runner.start(&fast_spinner(), "", false).await.unwrap();
    sleep(Duration::from_millis(10)).await;
    drop(runner);

    // The loop notices the closed stop channel and exits
    sleep(Duration::from_millis(30)).await;
    let settled = output.write_count();
    sleep(Duration::from_millis(30)).await;
    assert_eq!(output.write_count(), settled);
}

/// The final message is composed on an erased line even when frames were
/// wider than the message
#[tokio::test]
async fn test_final_message_overwrites_wide_frames() {
    let (mut runner, output) = test_runner();
    let spec = DOT_LINE.clone().with_frame_delay(Duration::from_millis(2));
    let cycle = spec.frame_delay() * spec.frame_count() as u32;

    runner.start(&spec, "", false).await.unwrap();
    sleep(cycle + Duration::from_millis(10)).await;
    runner.stop("ok").await.unwrap();

    let writes = output.writes();
    // Line erase spans the terminal width, which covers the 20-dot frame
    assert_eq!(
        writes[writes.len() - 2],
        format!("\r{}", " ".repeat(TEST_COLUMNS as usize - 1))
    );
    assert_eq!(writes[writes.len() - 1], "\rok\n");
}
