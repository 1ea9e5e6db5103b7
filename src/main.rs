use std::io::{self, Write};

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sort_timing_rs::bench::{self, Algorithm, BenchConfig};

fn main() {
    env_logger::init();

    println!("Welcome to the sort timing program.\n");
    println!("Choose the type of sort:");
    for algorithm in Algorithm::ALL {
        println!("{}. {}", algorithm as u32, algorithm.label());
    }
    print!("Your choice --> ");
    io::stdout().flush().expect("failed to flush stdout");

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .expect("failed to read menu choice");
    let choice: u32 = line.trim().parse().unwrap_or(0);

    let algorithm = match Algorithm::from_choice(choice) {
        Ok(algorithm) => algorithm,
        Err(err) => {
            println!("{err}. Exiting without sorting.");
            return;
        }
    };
    info!("benchmarking {}", algorithm.label());

    println!();
    println!(" Elapsed    Array Size     Sort Time  ");
    println!("(seconds)   (thousands)    (seconds)  ");

    let mut rng = StdRng::from_entropy();
    bench::run(algorithm, &BenchConfig::default(), &mut rng, |sample| {
        println!(
            "{:5}     {:8} {:15.4}",
            sample.elapsed.as_secs(),
            sample.len_thousands(),
            sample.sort_time.as_secs_f64()
        );
    });
}
