use buzybeez::fibonacci::fibonacci;

const COUNT: usize = 10;

fn main() {
    let numbers = fibonacci(COUNT);
    println!("First {COUNT} Fibonacci numbers:");
    println!("{numbers:?}");
}
