//! End-to-end runtime tests driving a session through the worker.
//!
//! Tests run with a paused tokio clock, so interval ticks fire via
//! auto-advance and a fifteen-year run completes instantly in wall time.

use std::time::Duration;

use tokio::time::timeout;

use runtime::{Event, Runtime, RuntimeError, Scenario, SessionEvent, TickerEvent, Topic};
use sim_core::{Metrics, Phase, PolicyModel, SimError, SimState};

async fn start_runtime(seed: u64) -> Runtime {
    Runtime::builder()
        .scenario(Scenario::standard().expect("standard scenario is valid"))
        .seed(seed)
        .build()
        .await
        .expect("runtime should start")
}

fn session_event(event: Event) -> SessionEvent {
    match event {
        Event::Session(inner) => inner,
        other => panic!("expected a session event, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn clock_ticks_advance_years_until_a_crisis() {
    let runtime = start_runtime(42).await;
    let handle = runtime.handle();
    let mut events = handle.subscribe(Topic::Session);

    handle.select_model(PolicyModel::Onoe).await.unwrap();
    assert!(matches!(
        session_event(events.recv().await.unwrap()),
        SessionEvent::ModelSelected {
            model: PolicyModel::Onoe
        }
    ));

    // Year 1 -> 2: ONOE drift only.
    let SessionEvent::YearAdvanced { year, metrics } = session_event(events.recv().await.unwrap())
    else {
        panic!("expected the first tick to advance a year");
    };
    assert_eq!(year, 2);
    assert_eq!(
        metrics,
        Metrics {
            fiscal: 52,
            stability: 52,
            accountability: 47,
            federalism: 50
        }
    );

    // Year 2 -> 3: the year-2 event triggers CLUSTER/ROLLING only.
    let SessionEvent::YearAdvanced { year, .. } = session_event(events.recv().await.unwrap())
    else {
        panic!("expected the second tick to advance a year");
    };
    assert_eq!(year, 3);

    // Year 3 raises the ONOE water crisis and pauses the clock.
    let SessionEvent::CrisisRaised { crisis } = session_event(events.recv().await.unwrap()) else {
        panic!("expected a crisis at year 3");
    };
    assert_eq!(crisis.title, "The Local Water Crisis");

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.phase(), Phase::Event);
    assert_eq!(state.year(), 3);
}

#[tokio::test(start_paused = true)]
async fn clock_stays_paused_while_a_crisis_is_pending() {
    let runtime = start_runtime(42).await;
    let handle = runtime.handle();
    let mut events = handle.subscribe(Topic::Session);

    handle.select_model(PolicyModel::Onoe).await.unwrap();
    loop {
        if let SessionEvent::CrisisRaised { .. } = session_event(events.recv().await.unwrap()) {
            break;
        }
    }

    // Many tick periods pass; the guarded clock must not fire.
    let silence = timeout(Duration::from_secs(60), events.recv()).await;
    assert!(silence.is_err(), "no events may arrive during a crisis");
    assert_eq!(handle.query_state().await.unwrap().year(), 3);

    handle.resolve_choice(0).await.unwrap();
    let SessionEvent::ChoiceResolved {
        year,
        entry,
        metrics,
    } = session_event(events.recv().await.unwrap())
    else {
        panic!("expected the choice resolution event");
    };
    assert_eq!(year, 4);
    assert_eq!(entry.to_string(), "Year 3: Suppress Protests (Ignore)");
    assert_eq!(metrics.accountability, 19);

    // The clock resumes from a full period after resolution.
    let SessionEvent::YearAdvanced { year, .. } = session_event(events.recv().await.unwrap())
    else {
        panic!("expected the clock to resume after the choice");
    };
    assert_eq!(year, 5);
}

#[tokio::test(start_paused = true)]
async fn full_run_finishes_exactly_once() {
    let runtime = start_runtime(7).await;
    let handle = runtime.handle();
    let mut events = handle.subscribe(Topic::Session);

    handle.select_model(PolicyModel::Onoe).await.unwrap();

    let mut finished = 0;
    let mut last_year = 1;
    loop {
        match session_event(events.recv().await.unwrap()) {
            SessionEvent::ModelSelected { .. } => {}
            SessionEvent::YearAdvanced { year, metrics } => {
                assert_eq!(year, last_year + 1);
                assert!(metrics.in_bounds());
                last_year = year;
            }
            SessionEvent::CrisisRaised { .. } => {
                handle.resolve_choice(1).await.unwrap();
            }
            SessionEvent::ChoiceResolved { year, metrics, .. } => {
                assert!(metrics.in_bounds());
                if year > last_year {
                    assert_eq!(year, last_year + 1);
                    last_year = year;
                }
            }
            SessionEvent::Finished { metrics, .. } => {
                assert!(metrics.in_bounds());
                finished += 1;
                break;
            }
            SessionEvent::Restarted => panic!("no restart was requested"),
        }
    }
    assert_eq!(finished, 1);

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.phase(), Phase::EndGame);
    assert_eq!(state.year(), 15);

    // A finished run stays silent until an explicit restart.
    let silence = timeout(Duration::from_secs(60), events.recv()).await;
    assert!(silence.is_err(), "no ticks may fire after END_GAME");
}

#[tokio::test(start_paused = true)]
async fn restart_returns_to_pristine_setup() {
    let runtime = start_runtime(7).await;
    let handle = runtime.handle();
    let mut events = handle.subscribe(Topic::Session);

    handle.select_model(PolicyModel::Rolling).await.unwrap();
    loop {
        match session_event(events.recv().await.unwrap()) {
            SessionEvent::CrisisRaised { .. } => handle.resolve_choice(0).await.unwrap(),
            SessionEvent::Finished { .. } => break,
            _ => {}
        }
    }

    handle.restart().await.unwrap();
    loop {
        if let SessionEvent::Restarted = session_event(events.recv().await.unwrap()) {
            break;
        }
    }

    let state = handle.query_state().await.unwrap();
    assert_eq!(state, SimState::new());
    assert_eq!(state.phase(), Phase::Setup);
    assert!(state.history().is_empty());
}

#[tokio::test(start_paused = true)]
async fn out_of_phase_commands_surface_sim_errors() {
    let runtime = start_runtime(1).await;
    let handle = runtime.handle();

    // No crisis is pending in SETUP.
    let err = handle.resolve_choice(0).await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Sim(SimError::Phase {
            operation: "resolve_choice",
            ..
        })
    ));

    handle.select_model(PolicyModel::Cluster).await.unwrap();
    let err = handle.select_model(PolicyModel::Onoe).await.unwrap_err();
    assert!(matches!(err, RuntimeError::Sim(SimError::Phase { .. })));
}

#[tokio::test(start_paused = true)]
async fn headlines_replay_identically_for_the_same_seed() {
    let mut transcripts = Vec::new();
    for _ in 0..2 {
        let runtime = start_runtime(99).await;
        let handle = runtime.handle();
        let mut session = handle.subscribe(Topic::Session);
        let mut ticker = handle.subscribe(Topic::Ticker);

        handle.select_model(PolicyModel::Onoe).await.unwrap();
        loop {
            match session_event(session.recv().await.unwrap()) {
                SessionEvent::CrisisRaised { .. } => handle.resolve_choice(0).await.unwrap(),
                SessionEvent::Finished { .. } => break,
                _ => {}
            }
        }

        let mut headlines = Vec::new();
        while let Ok(Event::Ticker(TickerEvent::Headline { year, headline })) = ticker.try_recv() {
            headlines.push((year, headline));
        }
        assert!(!headlines.is_empty(), "a full run should produce headlines");
        transcripts.push(headlines);

        drop(handle);
        drop(session);
        drop(ticker);
        runtime.shutdown().await.unwrap();
    }

    assert_eq!(transcripts[0], transcripts[1]);
}

#[tokio::test(start_paused = true)]
async fn shutdown_joins_the_worker() {
    let runtime = start_runtime(5).await;
    let handle = runtime.handle();
    handle.select_model(PolicyModel::Cluster).await.unwrap();

    drop(handle);
    timeout(Duration::from_secs(5), runtime.shutdown())
        .await
        .expect("shutdown should not hang once all handles are dropped")
        .unwrap();
}