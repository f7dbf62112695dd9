//! Countdown session timing on a paused tokio clock
//!
//! With `start_paused` the runtime jumps straight to the next timer
//! whenever every task is idle, so sleeping in the test lets the session
//! tick a known number of times.

use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle, time::sleep};

use interval_timer::{
    control::Command,
    machine::{Frame, MachineOptions, PhaseMachine},
    services::testing::{RecordingAnnouncer, RecordingDisplay},
    state::{Field, InputPanel, Phase, WorkoutConfig},
    tasks::Session,
};

type TestSession = Session<RecordingAnnouncer, RecordingDisplay>;

struct Harness {
    commands: mpsc::Sender<Command>,
    handle: JoinHandle<TestSession>,
    announcer: RecordingAnnouncer,
    display: RecordingDisplay,
}

impl Harness {
    fn spawn(config: WorkoutConfig, options: MachineOptions) -> Self {
        let announcer = RecordingAnnouncer::new();
        let display = RecordingDisplay::new();
        let session = Session::new(
            PhaseMachine::new(options),
            InputPanel::from(config),
            announcer.clone(),
            display.clone(),
        );
        let (commands, rx) = mpsc::channel(16);
        let handle = tokio::spawn(session.run(rx));
        Self {
            commands,
            handle,
            announcer,
            display,
        }
    }

    async fn send(&self, command: Command) {
        self.commands.send(command).await.unwrap();
    }

    fn last_frame(&self) -> Frame {
        self.display.last_frame().expect("no frame rendered")
    }

    async fn quit(self) -> TestSession {
        self.send(Command::Quit).await;
        self.handle.await.unwrap()
    }
}

#[tokio::test(start_paused = true)]
async fn renders_preview_on_open() {
    let harness = Harness::spawn(WorkoutConfig::new(20, 5, 15, 2, 2), MachineOptions::default());
    sleep(Duration::from_millis(10)).await;

    assert_eq!(harness.last_frame(), Frame::new("01:45", "Press Start"));
    let session = harness.quit().await;
    assert_eq!(session.machine().phase(), Phase::Idle);
}

#[tokio::test(start_paused = true)]
async fn ticks_once_per_second() {
    let harness = Harness::spawn(WorkoutConfig::new(20, 5, 5, 1, 1), MachineOptions::default());
    harness.send(Command::Start).await;

    sleep(Duration::from_millis(500)).await;
    assert_eq!(harness.last_frame().time, "00:20");
    sleep(Duration::from_secs(3)).await;
    assert_eq!(harness.last_frame().time, "00:17");

    let session = harness.quit().await;
    assert_eq!(session.machine().state().remaining_seconds, 17);
    assert!(!session.is_ticking());
}

#[tokio::test(start_paused = true)]
async fn pause_stops_ticks_and_resume_continues() {
    let harness = Harness::spawn(WorkoutConfig::new(20, 5, 5, 1, 1), MachineOptions::default());
    harness.send(Command::Toggle).await;
    sleep(Duration::from_millis(8500)).await;
    assert_eq!(harness.last_frame(), Frame::new("00:12", "WORK 1/1 (Round 1/1)"));

    harness.send(Command::Toggle).await;
    sleep(Duration::from_secs(10)).await;
    assert_eq!(harness.last_frame(), Frame::new("00:12", "PAUSED"));

    harness.send(Command::Toggle).await;
    sleep(Duration::from_millis(1200)).await;
    assert_eq!(harness.last_frame(), Frame::new("00:11", "WORK 1/1 (Round 1/1)"));
    assert_eq!(harness.announcer.phrases(), vec!["Work"]);

    harness.quit().await;
}

#[tokio::test(start_paused = true)]
async fn repeated_start_does_not_double_decrement() {
    let harness = Harness::spawn(WorkoutConfig::new(20, 5, 5, 1, 1), MachineOptions::default());
    harness.send(Command::Start).await;
    sleep(Duration::from_millis(1500)).await;
    harness.send(Command::Start).await;
    harness.send(Command::Start).await;
    sleep(Duration::from_secs(2)).await;

    let session = harness.quit().await;
    assert_eq!(session.machine().state().remaining_seconds, 17);
}

#[tokio::test(start_paused = true)]
async fn runs_to_completion_then_resets() {
    let harness = Harness::spawn(WorkoutConfig::new(2, 1, 1, 2, 1), MachineOptions::default());
    harness.send(Command::Toggle).await;
    sleep(Duration::from_millis(5500)).await;

    assert_eq!(harness.last_frame(), Frame::new("00:00", "DONE!"));
    assert_eq!(
        harness.announcer.phrases(),
        vec!["Work", "1", "Rest", "Work", "1", "Workout Complete"]
    );
    assert_eq!(harness.announcer.chimes(), 3);

    // No ticks after finishing
    let frames = harness.display.frames().len();
    sleep(Duration::from_secs(5)).await;
    assert_eq!(harness.display.frames().len(), frames);

    harness.send(Command::Toggle).await;
    sleep(Duration::from_millis(10)).await;
    assert_eq!(harness.last_frame(), Frame::new("00:05", "Press Start"));

    let session = harness.quit().await;
    let state = session.machine().state();
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.current_exercise, 1);
    assert_eq!(state.current_round, 1);
}

#[tokio::test(start_paused = true)]
async fn edits_while_paused_apply_on_resume() {
    let harness = Harness::spawn(WorkoutConfig::new(10, 5, 5, 2, 1), MachineOptions::default());
    harness.send(Command::Start).await;
    sleep(Duration::from_millis(2500)).await;
    harness.send(Command::Pause).await;
    harness
        .send(Command::Set {
            field: Field::Exercises,
            value: "3".to_string(),
        })
        .await;
    harness
        .send(Command::Set {
            field: Field::Rest,
            value: "3".to_string(),
        })
        .await;
    sleep(Duration::from_millis(10)).await;
    assert_eq!(harness.last_frame(), Frame::new("00:08", "PAUSED"));

    harness.send(Command::Start).await;
    sleep(Duration::from_millis(10)).await;
    assert_eq!(harness.last_frame(), Frame::new("00:08", "WORK 1/3 (Round 1/1)"));

    sleep(Duration::from_secs(8)).await;
    assert_eq!(harness.last_frame(), Frame::new("00:03", "REST"));

    harness.quit().await;
}

#[tokio::test(start_paused = true)]
async fn prepare_phase_counts_down_first() {
    let harness = Harness::spawn(
        WorkoutConfig::new(5, 5, 3, 1, 1),
        MachineOptions {
            prepare: true,
            ..Default::default()
        },
    );
    sleep(Duration::from_millis(10)).await;
    assert_eq!(harness.last_frame(), Frame::new("00:08", "Press Start"));

    harness.send(Command::Start).await;
    sleep(Duration::from_millis(500)).await;
    assert_eq!(harness.last_frame(), Frame::new("00:03", "GET READY"));
    sleep(Duration::from_secs(3)).await;
    assert_eq!(harness.last_frame(), Frame::new("00:05", "WORK 1/1 (Round 1/1)"));
    assert_eq!(harness.announcer.phrases(), vec!["Get Ready", "2", "1", "Work"]);

    harness.quit().await;
}

#[tokio::test(start_paused = true)]
async fn closing_the_channel_ends_the_session() {
    let harness = Harness::spawn(WorkoutConfig::new(20, 5, 5, 1, 1), MachineOptions::default());
    harness.send(Command::Start).await;
    sleep(Duration::from_millis(1500)).await;

    let Harness { commands, handle, .. } = harness;
    drop(commands);
    let session = handle.await.unwrap();
    assert_eq!(session.machine().state().remaining_seconds, 19);
}
