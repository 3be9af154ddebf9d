use std::env;

use rand::Rng;

fn main() {
    let args: Vec<String> = env::args().collect();
    let bound = if args.len() >= 2 {
        args[1].parse::<i32>().expect("First argument should be integer")
    } else { 50 };
    if bound < 1 || bound > 1000 { panic!("Wrong bound argument") }

    let mut rng = rand::thread_rng();
    let mode = if rng.gen_range(0, 2) == 0 { "lin" } else { "log" };
    // keep log exponents small enough that 10^high still fits in an i64
    let span = if mode == "log" { bound.min(9) } else { bound };
    let low = rng.gen_range(-span, span);
    let high = rng.gen_range(low, span + 1);
    let num = rng.gen_range(2, 21);
    println!("space {} {} {} {}", mode, low, high, num);
}
