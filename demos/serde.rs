use textcompare::compare;

fn main() {
    let result = compare("Hello World", "Hello  World!");
    println!("{}", serde_json::to_string_pretty(&result).unwrap());
}
