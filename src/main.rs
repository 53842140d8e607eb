use log::{error, info, LevelFilter};
use ordered_trees::bst::BstMap;
use ordered_trees::red_black_tree::RedBlackMap;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

const KEYS: [(char, u32); 10] = [
    ('A', 8),
    ('E', 12),
    ('M', 9),
    ('C', 4),
    ('P', 10),
    ('S', 0),
    ('H', 5),
    ('X', 7),
    ('L', 11),
    ('R', 3),
];

fn print_levels<'a, T, I>(levels: I)
where
    T: Display + 'a,
    I: Iterator<Item = Vec<&'a T>>,
{
    for level in levels {
        let keys: Vec<String> = level.iter().map(|key| key.to_string()).collect();
        println!("{}", keys.join(" "));
    }
}

fn main() {
    let level = env::args()
        .nth(1)
        .and_then(|arg| LevelFilter::from_str(&arg).ok())
        .unwrap_or(LevelFilter::Info);
    if let Err(err) =
        TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
    {
        eprintln!("failed to initialize logger: {}", err);
    }

    let mut bst = BstMap::new();
    for &(key, value) in KEYS.iter() {
        if let Err(err) = bst.insert(key, value) {
            error!("failed to insert {}: {}", key, err);
        }
    }
    info!("built binary search tree with {} keys, height {}", bst.len(), bst.height());
    print_levels(bst.level_order());
    println!("***************");

    let mut llrb = RedBlackMap::new();
    for &(key, value) in KEYS.iter() {
        llrb.insert(key, value);
    }
    info!("built red black tree with {} keys, height {}", llrb.len(), llrb.height());
    print_levels(llrb.level_order());
    println!("***************");

    match llrb.remove(&'H') {
        Some((key, value)) => info!("removed {} => {}", key, value),
        None => error!("H was not in the tree"),
    }
    print_levels(llrb.level_order());

    if let Err(err) = llrb.check() {
        error!("{}", err);
    }
}
