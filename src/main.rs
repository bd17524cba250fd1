use fifteen_puzzle::round::{PuzzleConfig, Round};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0);
    let mut rng = SmallRng::seed_from_u64(seed);

    match Round::new(&PuzzleConfig::default(), &mut rng) {
        Ok(round) => {
            println!("Fifteen Puzzle (seed {})", seed);
            println!();
            print!("{}", round.board());
        }
        Err(error) => eprintln!("Could not deal a round: {}", error),
    }
}
