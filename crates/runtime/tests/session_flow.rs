//! Scenario playback through the reference host.

use npc_content::{ActionSpec, Command, ContentFactory, ScenarioSpec};
use npc_core::{GamePhase, Point3, SchedulerConfig, SchedulerEvent, Waypoint};
use npc_runtime::{KinematicActor, RuntimeError, Session};

const DT: f32 = 0.125;

fn stand(priority: f32, name: &str, duration: f32) -> ActionSpec {
    ActionSpec::StandStill {
        priority,
        name: name.into(),
        duration,
        target: None,
        thought: None,
        discard_after: 0.0,
    }
}

fn activated(events: &[SchedulerEvent]) -> Vec<&str> {
    events
        .iter()
        .filter_map(|e| match e {
            SchedulerEvent::Activated { name, .. } => Some(name.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn timed_commands_drive_preemption() {
    let scenario = ScenarioSpec::new("preempt")
        .with_command(0.0, Command::Enqueue(stand(30.0, "Idle", 0.0)))
        .with_command(1.0, Command::Enqueue(stand(10.0, "Urgent", 0.5)));
    let mut session = Session::new(SchedulerConfig::default(), scenario);

    let events = session.run(24, DT).unwrap();
    assert_eq!(activated(&events), vec!["Idle", "Urgent", "Idle"]);
    assert!(events.iter().any(|e| matches!(
        e,
        SchedulerEvent::Requeued { name, .. } if name == "Idle"
    )));
    assert_eq!(session.scheduler().current_name(), Some("Idle"));
}

#[test]
fn player_passing_by_is_survived() {
    let far = Point3::new(30.0, 0.0, 0.0);
    let scenario = ScenarioSpec::new("pass-by")
        .with_player_sample(0.0, far)
        .with_player_sample(1.0, Point3::new(1.0, 0.0, 0.0))
        .with_player_sample(1.5, far);
    let mut session = Session::new(SchedulerConfig::default(), scenario);

    let events = session.run(32, DT).unwrap();
    assert!(!session.is_over());
    assert!(!events.contains(&SchedulerEvent::ActorDied));
    assert!(events.iter().any(|e| matches!(
        e,
        SchedulerEvent::Completed { name, .. } if name == "NearPlayer"
    )));
    assert!(!session.level().in_danger());
    assert!(session.scheduler().is_idle());
}

#[test]
fn lingering_player_kills_actor() {
    let scenario = ScenarioSpec::new("linger").with_player_sample(0.5, Point3::new(1.0, 0.0, 0.0));
    let mut session = Session::new(SchedulerConfig::default(), scenario);

    let events = session.run(100, DT).unwrap();
    assert!(session.is_over());
    assert!(session.actor().is_dead());
    assert_eq!(
        events
            .iter()
            .filter(|e| **e == SchedulerEvent::ActorDied)
            .count(),
        1
    );
    // Death at 0.5 + 0.75, give or take a tick
    assert!(session.clock() <= 1.5);
}

#[test]
fn actor_walks_to_move_to_goal() {
    let goal = Point3::new(2.0, 0.0, 0.0);
    let scenario = ScenarioSpec::new("walk").with_command(
        0.0,
        Command::Enqueue(ActionSpec::MoveTo {
            priority: 20.0,
            name: "Walk".into(),
            goal: Waypoint::passing(goal),
            wait_before: 0.0,
            thought: Some("flag".into()),
            discard_after: 0.0,
        }),
    );
    let mut session = Session::new(SchedulerConfig::default(), scenario);

    let events = session.run(40, DT).unwrap();
    assert!(events.iter().any(|e| matches!(
        e,
        SchedulerEvent::Completed { name, .. } if name == "Walk"
    )));
    assert!(session.actor().position().distance(goal) < 0.3);
    assert!(session.scheduler().is_idle());
    assert_eq!(session.actor().thought(), None);
}

#[test]
fn custom_actor_waits_out_path_latency() {
    let goal = Point3::new(2.0, 0.0, 0.0);
    let scenario = ScenarioSpec::new("slow-walk").with_command(
        0.0,
        Command::Enqueue(ActionSpec::MoveTo {
            priority: 20.0,
            name: "Walk".into(),
            goal: Waypoint::passing(goal),
            wait_before: 0.0,
            thought: None,
            discard_after: 0.0,
        }),
    );
    let actor = KinematicActor::new(Point3::new(0.0, 0.0, 0.0), 1.0).with_path_delay(1.0);
    let mut session = Session::new(SchedulerConfig::default(), scenario).with_actor(actor);

    // Path latency holds the actor in place for the first second
    session.run(4, DT).unwrap();
    assert_eq!(session.actor().position(), Point3::new(0.0, 0.0, 0.0));
    assert_eq!(session.actor().destination(), Some(goal));

    session.run(12, DT).unwrap();
    assert!(session.actor().position().distance(goal) > 0.5);
    assert_eq!(session.scheduler().current_name(), Some("Walk"));

    let events = session.run(24, DT).unwrap();
    assert!(events.iter().any(|e| matches!(
        e,
        SchedulerEvent::Completed { name, .. } if name == "Walk"
    )));
    assert!(session.scheduler().is_idle());
}

#[test]
fn paused_session_holds_still() {
    let scenario =
        ScenarioSpec::new("pause").with_command(0.0, Command::Enqueue(stand(20.0, "Wait", 0.5)));
    let mut session = Session::new(SchedulerConfig::default(), scenario);
    session.set_phase(GamePhase::Paused);

    for _ in 0..10 {
        let outcome = session.step(DT).unwrap();
        assert!(!outcome.report.ran);
    }
    assert!(session.scheduler().is_idle());

    session.set_phase(GamePhase::Playing);
    let outcome = session.step(DT).unwrap();
    assert_eq!(activated(&outcome.events), vec!["Wait"]);
}

#[test]
fn reserved_names_fail_the_command() {
    let scenario = ScenarioSpec::new("bad")
        .with_command(0.5, Command::Enqueue(stand(1.0, "DefaultStandStill", 1.0)));
    let mut session = Session::new(SchedulerConfig::default(), scenario);

    session.step(0.25).unwrap();
    session.step(0.25).unwrap();
    let err = session.step(0.25).unwrap_err();
    assert!(matches!(err, RuntimeError::Command { at, .. } if at == 0.5));
}

#[test]
fn rejects_bad_tick_lengths() {
    let mut session = Session::new(SchedulerConfig::default(), ScenarioSpec::new("empty"));
    assert!(matches!(session.step(0.0), Err(RuntimeError::InvalidTick(_))));
    assert!(matches!(session.step(f32::NAN), Err(RuntimeError::InvalidTick(_))));
}

#[test]
fn bundled_scenarios_play_through() {
    let factory = ContentFactory::bundled();
    let config = factory.load_config().unwrap();

    let patrol = factory.load_scenario("patrol").unwrap();
    let mut session = Session::new(config.clone(), patrol);
    let events = session.run(160, DT).unwrap();
    assert!(!session.is_over());
    assert!(activated(&events).contains(&"CheckLever"));
    assert!(events.iter().any(|e| matches!(
        e,
        SchedulerEvent::Discarded { name, .. } if name == "Stretch"
    )));

    let intruder = factory.load_scenario("intruder").unwrap();
    let mut session = Session::new(config, intruder);
    let events = session.run(80, DT).unwrap();
    assert!(!session.is_over());
    assert!(activated(&events).contains(&"NearPlayer"));
}
