// Self-playing demo: drives the game engine until the board is stuck

use log::{debug, info};
use tile_grid::display::{format_board, DisplayOptions};
use tile_grid::{Direction, GameEngine, GridConfig};

const BANNER: &str = r#"
  _____ _ _        ____      _     _
 |_   _(_) | ___  / ___|_ __(_) __| |
   | | | | |/ _ \| |  _| '__| |/ _` |
   | | | | |  __/| |_| | |  | | (_| |
   |_| |_|_|\___| \____|_|  |_|\__,_|
"#;

const MAX_TURNS: usize = 500;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("{}", BANNER);

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok());

    let mut engine = match seed {
        Some(seed) => {
            println!("Seeded game (seed = {})", seed);
            GameEngine::with_seed(GridConfig::default(), seed)
        }
        None => GameEngine::new(GridConfig::default()),
    };

    engine
        .board_mut()
        .add_event_listener(|event| debug!("board event: {:?}", event));

    engine.start()?;
    let options = DisplayOptions::default();
    println!("{}", format_board(engine.board(), &options));

    // Corner strategy: prefer Up/Left, fall back to Down/Right
    let preference = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    for _ in 0..MAX_TURNS {
        let mut moved = false;
        for direction in preference {
            let outcome = engine.step(direction)?;
            if outcome.changed {
                info!("turn {}: shifted {:?}", engine.turn(), direction);
                println!("{}", format_board(engine.board(), &options));
                moved = true;
                if !outcome.has_moves {
                    println!("No moves left after turn {} - game over", engine.turn());
                    return Ok(());
                }
                break;
            }
        }
        if !moved {
            println!("Board stuck after turn {} - game over", engine.turn());
            return Ok(());
        }
    }

    println!("Stopped after {} turns", engine.turn());
    Ok(())
}
