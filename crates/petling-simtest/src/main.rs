//! Petling Headless Simulation Harness
//!
//! Validates progression and arcade logic without a UI or storage backend.
//! Runs entirely in-process — no DB, no networking, no rendering.
//!
//! Usage:
//!   cargo run -p petling-simtest
//!   cargo run -p petling-simtest -- --verbose

use petling_arcade::dodge::{self, DodgeConfig, DodgeInput, DodgeState};
use petling_arcade::runner::{self, Obstacle, RunnerConfig, RunnerInput, RunnerState};
use petling_engine::prelude::*;
use petling_engine::persistence;
use petling_logic::actions::ActionKind;
use petling_logic::quests::{Quest, QuestKind};
use petling_logic::stats::{self, DecayRates, Gauges};

const NOW: f64 = 1_700_000_000.0;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.to_string(),
        passed,
        detail,
    }
}

fn main() {
    env_logger::init();
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Petling Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Stat decay sweep
    results.extend(validate_decay(verbose));

    // 2. Action & leveling loop
    results.extend(validate_progression(verbose));

    // 3. Quest lifecycle
    results.extend(validate_quests(verbose));

    // 4. Score submission & snapshot roundtrip
    results.extend(validate_engine_surface(verbose));

    // 5. Arcade simulations
    results.extend(validate_runner(verbose));
    results.extend(validate_dodge(verbose));

    // ── Summary ─────────────────────────────────────────────────────────
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;
    println!("\n=== Summary: {passed} passed, {failed} failed ===");
    for result in &results {
        if !result.passed {
            println!("  FAIL {} — {}", result.name, result.detail);
        }
    }
    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Stat decay ───────────────────────────────────────────────────────

fn validate_decay(verbose: bool) -> Vec<TestResult> {
    println!("[decay] elapsed-time gauge decay");
    let rates = DecayRates::default();
    let mut results = Vec::new();

    for hours in [0.5_f32, 2.0, 8.0, 24.0, 100.0] {
        let mut gauges = Gauges::full();
        stats::decay(&mut gauges, hours, &rates);
        let expect = |rate: f32| (100.0 - rate * hours).max(0.0);
        let ok = (gauges.hunger - expect(5.0)).abs() < 0.01
            && (gauges.energy - expect(3.0)).abs() < 0.01
            && (gauges.mood - expect(2.0)).abs() < 0.01
            && (gauges.health - 100.0).abs() < f32::EPSILON;
        if verbose {
            println!(
                "  {hours:>5.1}h → hunger {:.1} energy {:.1} mood {:.1}",
                gauges.hunger, gauges.energy, gauges.mood
            );
        }
        results.push(check(
            &format!("decay {hours}h linear+clamped"),
            ok,
            format!("{gauges:?}"),
        ));
    }

    let mut gauges = Gauges::full();
    let applied = stats::decay(&mut gauges, 0.05, &rates);
    results.push(check(
        "decay sub-threshold no-op",
        !applied && (gauges.hunger - 100.0).abs() < f32::EPSILON,
        format!("applied={applied}"),
    ));

    results
}

// ── 2. Actions & leveling ───────────────────────────────────────────────

fn validate_progression(verbose: bool) -> Vec<TestResult> {
    println!("[progression] care actions and leveling");
    let mut results = Vec::new();

    let engine = ProgressionEngine::new(MemoryStore::new(), EngineConfig::default());
    engine.adopt(Pet::new("sweep", "Pixel", "tester").adopted_at(NOW));

    // Run the full table once
    let mut now = NOW;
    for action in ActionKind::ALL {
        now += 1.0;
        match engine.apply_action("sweep", "tester", action, now) {
            Ok(outcome) => {
                if verbose {
                    println!(
                        "  {:<5} → xp {} coins {}",
                        action.name(),
                        outcome.pet.state.xp,
                        outcome.pet.state.pet_coins
                    );
                }
                results.push(check(
                    &format!("action {} applies", action.name()),
                    true,
                    String::new(),
                ));
            }
            Err(err) => results.push(check(
                &format!("action {} applies", action.name()),
                false,
                err.to_string(),
            )),
        }
    }

    // Grind XP until the pet levels; invariant xp < level*100 must hold
    // after every transaction
    let mut leveled = false;
    let mut invariant = true;
    for i in 0..30 {
        now += 1.0 + f64::from(i);
        let outcome = match engine.apply_action("sweep", "tester", ActionKind::Clean, now) {
            Ok(o) => o,
            Err(_) => break,
        };
        leveled |= outcome.leveled_up;
        invariant &= outcome.pet.state.xp < outcome.pet.state.level * 100;
    }
    results.push(check("leveling reached via grind", leveled, String::new()));
    results.push(check(
        "xp-below-threshold invariant",
        invariant,
        String::new(),
    ));

    // Precondition rejection leaves the record untouched
    let engine = ProgressionEngine::new(MemoryStore::new(), EngineConfig::default());
    let mut broke = Pet::new("broke", "Mochi", "tester").adopted_at(NOW);
    broke.state.pet_coins = 5;
    engine.adopt(broke);
    let before = engine.pet("broke").unwrap();
    let rejected = engine
        .apply_action("broke", "tester", ActionKind::Feed, NOW)
        .is_err();
    let untouched = engine.pet("broke").unwrap() == before;
    results.push(check(
        "feed precondition rejects & rolls back",
        rejected && untouched,
        String::new(),
    ));

    results
}

// ── 3. Quests ───────────────────────────────────────────────────────────

fn validate_quests(verbose: bool) -> Vec<TestResult> {
    println!("[quests] lifecycle: advance → complete → claim");
    let mut results = Vec::new();

    let engine = ProgressionEngine::new(MemoryStore::new(), EngineConfig::default());
    let mut pet = Pet::new("q", "Clover", "tester").adopted_at(NOW);
    let mut quest = Quest::new(1, QuestKind::Feed, 2, 80);
    quest.progress = 1;
    pet.daily_quests = vec![quest, Quest::new(2, QuestKind::Xp, 40, 40)];
    engine.adopt(pet);

    let outcome = engine
        .apply_action("q", "tester", ActionKind::Feed, NOW)
        .unwrap();
    let feed_done = outcome.pet.daily_quests[0].completed;
    let xp_progress = outcome.pet.daily_quests[1].progress;
    if verbose {
        println!("  feed quest completed={feed_done}, xp quest at {xp_progress}/40");
    }
    results.push(check("feed quest completes at target", feed_done, String::new()));
    results.push(check(
        "xp quest advances by exact gain",
        xp_progress == 15,
        format!("got {xp_progress}"),
    ));

    let coins_before = outcome.pet.state.pet_coins;
    let claimed = engine.claim_quest("q", 1, NOW).unwrap();
    let reclaim_rejected = engine.claim_quest("q", 1, NOW).is_err();
    let no_double_credit = engine.pet("q").unwrap().state.pet_coins == coins_before + 80;
    results.push(check(
        "claim pays exactly once",
        claimed.reward == 80 && reclaim_rejected && no_double_credit,
        String::new(),
    ));

    results
}

// ── 4. Scores & snapshots ───────────────────────────────────────────────

fn validate_engine_surface(verbose: bool) -> Vec<TestResult> {
    println!("[engine] score submission and snapshot roundtrip");
    let mut results = Vec::new();

    let engine = ProgressionEngine::new(MemoryStore::new(), EngineConfig::default());
    engine.adopt(Pet::new("s", "Nori", "tester").adopted_at(NOW));

    engine.submit_score("s", "tester", 42).unwrap();
    engine.submit_score("s", "tester", 30).unwrap();
    let best = engine.pet("s").unwrap().high_scores["tester"];
    results.push(check(
        "best score is monotone",
        best == 42,
        format!("got {best}"),
    ));

    engine.buy_item("s", "tester", "party-hat").unwrap();
    engine.equip_item("s", "party-hat").unwrap();

    let mut buf = Vec::new();
    persistence::save(engine.store(), &mut buf).unwrap();
    let json = persistence::save_json(engine.store()).unwrap();
    let fresh = MemoryStore::new();
    let loaded = persistence::load(&fresh, buf.as_slice()).unwrap();
    let same = fresh.get("s").unwrap() == engine.pet("s").unwrap();
    if verbose {
        println!("  snapshot: {} bytes binary, {} bytes json", buf.len(), json.len());
    }
    results.push(check(
        "snapshot roundtrip preserves the record",
        loaded == 1 && same,
        String::new(),
    ));

    results
}

// ── 5. Arcade: runner ───────────────────────────────────────────────────

fn validate_runner(verbose: bool) -> Vec<TestResult> {
    println!("[runner] side-scroller physics and scoring");
    let config = RunnerConfig::default();
    let mut results = Vec::new();

    // Frame-rate independence: one scripted jump over one obstacle, under
    // several dt grids covering the same 1.2 s
    let mut scores = Vec::new();
    for &dt in &[0.004_f32, 0.01, 0.02, 0.05] {
        let mut state = RunnerState::new();
        state.obstacles.push(Obstacle {
            x: 160.0,
            passed: false,
        });
        let steps = (1.2 / dt).round() as usize;
        for i in 0..steps {
            let input = RunnerInput { jump: i == 0 };
            runner::tick(&mut state, &input, &config, dt);
        }
        if verbose {
            println!("  dt={dt}: score {} game_over {}", state.score, state.game_over);
        }
        scores.push((dt, state.score, state.game_over));
    }
    let all_one = scores.iter().all(|&(_, s, over)| s == 1 && !over);
    results.push(check(
        "runner score is dt-independent",
        all_one,
        format!("{scores:?}"),
    ));

    // A grounded player must eventually collide
    let mut state = RunnerState::new();
    for _ in 0..4000 {
        runner::tick(&mut state, &RunnerInput::default(), &config, 0.01);
        if state.game_over {
            break;
        }
    }
    results.push(check("grounded runner ends the run", state.game_over, String::new()));

    results
}

// ── 6. Arcade: dodge ────────────────────────────────────────────────────

fn validate_dodge(verbose: bool) -> Vec<TestResult> {
    println!("[dodge] vertical dodge survival and determinism");
    let config = DodgeConfig::default();
    let mut results = Vec::new();

    // Same seed + same input trace = same run
    let run = |seed: u64| {
        let mut state = DodgeState::new(&config, seed);
        for i in 0..2000 {
            let input = DodgeInput {
                move_dir: if i % 400 < 200 { 1.0 } else { -1.0 },
            };
            dodge::tick(&mut state, &input, &config, 0.01);
            if state.game_over {
                break;
            }
        }
        state
    };
    let a = run(12345);
    let b = run(12345);
    if verbose {
        println!(
            "  seed 12345 → score {} coins {} game_over {}",
            a.score_points(),
            a.coins,
            a.game_over
        );
    }
    results.push(check(
        "dodge runs are seed-deterministic",
        a.score_points() == b.score_points() && a.coins == b.coins && a.game_over == b.game_over,
        String::new(),
    ));

    // Survival score accrues with time only
    let quiet = DodgeConfig {
        spawn_interval: 1000.0,
        ..DodgeConfig::default()
    };
    let mut state = DodgeState::new(&quiet, 1);
    for _ in 0..500 {
        dodge::tick(&mut state, &DodgeInput::default(), &quiet, 0.01);
    }
    let score = state.score_points();
    results.push(check(
        "dodge score accrues per second",
        (49..=50).contains(&score),
        format!("got {score}"),
    ));

    results
}
