//! Headless balance simulator.
//!
//! Drives seeded sessions through the full combat/exploration/shop loop,
//! supplying the collision layer a host engine would normally provide, and
//! reports how far each run survives.
//!
//! Usage:
//!   cargo run --bin simulate -- [runs] [--seed N] [--max-ticks N]

use rand::rngs::StdRng;
use rand::SeedableRng;
use starfall::entities::Vec2;
use starfall::events::{CollisionEvent, Direction, Effect, GameEvent, Input, Scene};
use starfall::items::ItemCategory;
use starfall::session::Session;
use std::env;

const DT: f64 = 0.05;
const HIT_RADIUS: f64 = 18.0;

struct Config {
    runs: u64,
    seed: u64,
    max_ticks: u64,
}

struct RunReport {
    waves_survived: u32,
    score: u32,
    gold: u32,
    saves: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = parse_args();
    println!(
        "simulating {} run(s), base seed {}, {} ticks max",
        config.runs, config.seed, config.max_ticks
    );

    let mut reports = Vec::new();
    for run in 0..config.runs {
        let report = run_once(config.seed.wrapping_add(run), config.max_ticks);
        println!(
            "run {:>3}: waves {:>3}  score {:>6}  gold {:>6}  saves {:>3}",
            run, report.waves_survived, report.score, report.gold, report.saves
        );
        reports.push(report);
    }

    if !reports.is_empty() {
        let avg_waves =
            reports.iter().map(|r| r.waves_survived as f64).sum::<f64>() / reports.len() as f64;
        let avg_score = reports.iter().map(|r| r.score as f64).sum::<f64>() / reports.len() as f64;
        println!("average: {avg_waves:.1} waves, {avg_score:.0} score");
    }
}

fn parse_args() -> Config {
    let args: Vec<String> = env::args().collect();
    let mut config = Config {
        runs: 10,
        seed: 1,
        max_ticks: 200_000,
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                config.seed = args.get(i).and_then(|s| s.parse().ok()).unwrap_or(1);
            }
            "--max-ticks" => {
                i += 1;
                config.max_ticks = args.get(i).and_then(|s| s.parse().ok()).unwrap_or(200_000);
            }
            other => {
                if let Ok(runs) = other.parse() {
                    config.runs = runs;
                }
            }
        }
        i += 1;
    }
    config
}

fn run_once(seed: u64, max_ticks: u64) -> RunReport {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = Session::new();
    let mut saves = 0;

    feed(&mut session, &mut rng, GameEvent::Input(Input::NewGame), &mut saves);

    for _ in 0..max_ticks {
        match session.scene() {
            Scene::Combat => drive_combat(&mut session, &mut rng, &mut saves),
            Scene::Exploration => drive_exploration(&mut session, &mut rng, &mut saves),
            Scene::Shop => drive_shop(&mut session, &mut rng, &mut saves),
            Scene::GameOver => break,
            _ => {
                feed(&mut session, &mut rng, GameEvent::Tick { dt: DT }, &mut saves);
            }
        }
    }

    RunReport {
        waves_survived: session.state().wave.saturating_sub(1),
        score: session.state().score,
        gold: session.state().gold,
        saves,
    }
}

fn drive_combat(session: &mut Session, rng: &mut StdRng, saves: &mut u32) {
    // Chase the lowest enemy's column and keep the trigger held.
    let target = session
        .battlefield()
        .enemies
        .iter()
        .max_by(|a, b| a.position.y.total_cmp(&b.position.y))
        .map(|enemy| enemy.position.x);
    if let Some(x) = target {
        let direction = if x < session.player_position().x {
            Direction::Left
        } else {
            Direction::Right
        };
        feed(session, rng, GameEvent::Input(Input::Move(direction)), saves);
    }
    feed(session, rng, GameEvent::Input(Input::Fire), saves);
    feed(session, rng, GameEvent::Tick { dt: DT }, saves);
    if session.scene() != Scene::Combat {
        return;
    }

    // Proximity pass standing in for the host's collision shapes.
    let field = session.battlefield().clone();
    let player = session.player_position();
    let mut collisions = Vec::new();
    for bullet in &field.bullets {
        for enemy in &field.enemies {
            if close(bullet.position, enemy.position, HIT_RADIUS) {
                collisions.push(CollisionEvent::BulletEnemy {
                    bullet: bullet.id,
                    enemy: enemy.id,
                });
            }
        }
    }
    for bullet in &field.enemy_bullets {
        if close(bullet.position, player, HIT_RADIUS) {
            collisions.push(CollisionEvent::EnemyBulletPlayer { bullet: bullet.id });
        }
    }
    for enemy in &field.enemies {
        if close(enemy.position, player, HIT_RADIUS) {
            collisions.push(CollisionEvent::EnemyPlayer { enemy: enemy.id });
        }
    }
    for collision in collisions {
        feed(session, rng, GameEvent::Collision(collision), saves);
        if session.scene() != Scene::Combat {
            break;
        }
    }
}

fn drive_exploration(session: &mut Session, rng: &mut StdRng, saves: &mut u32) {
    // Hoover up every placement, gear up, then head back to space.
    while !session.state().planet_items.is_empty() {
        feed(
            session,
            rng,
            GameEvent::Collision(CollisionEvent::PlayerItem { index: 0 }),
            saves,
        );
    }
    equip_everything(session, rng, saves);
    feed(session, rng, GameEvent::Input(Input::ReturnToShip), saves);
}

fn drive_shop(session: &mut Session, rng: &mut StdRng, saves: &mut u32) {
    // Greedy sweep over the whole catalog; good enough for balance probing.
    for index in 0..starfall::catalog::CATALOG.len() {
        feed(session, rng, GameEvent::Input(Input::Buy(index)), saves);
    }
    equip_everything(session, rng, saves);
    feed(session, rng, GameEvent::Input(Input::Checkout), saves);
}

fn equip_everything(session: &mut Session, rng: &mut StdRng, saves: &mut u32) {
    feed(session, rng, GameEvent::Input(Input::OpenInventory), saves);
    // One bounded pass over the list, equipping whatever fits a slot.
    for _ in 0..session.state().inventory.len() {
        let equippable = session
            .selected_index()
            .map(|i| session.state().inventory[i].category != ItemCategory::Consumable)
            .unwrap_or(false);
        if equippable {
            feed(session, rng, GameEvent::Input(Input::Equip), saves);
        } else {
            feed(session, rng, GameEvent::Input(Input::SelectDown), saves);
        }
    }
    feed(session, rng, GameEvent::Input(Input::CloseScreen), saves);
}

fn feed(session: &mut Session, rng: &mut StdRng, event: GameEvent, saves: &mut u32) {
    for effect in session.handle_event_with(event, rng) {
        match effect {
            Effect::SaveRequested => *saves += 1,
            Effect::Notice(text) => tracing::debug!(%text, "notice"),
            Effect::SceneChanged(scene) => tracing::debug!(?scene, "scene change"),
            Effect::GameOver {
                score,
                waves_survived,
            } => tracing::info!(score, waves_survived, "game over"),
        }
    }
}

fn close(a: Vec2, b: Vec2, radius: f64) -> bool {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy <= radius * radius
}
