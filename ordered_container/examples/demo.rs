use ordered_container::{Container, ContainerError, OrderView};

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .format_timestamp(None)
        .init();

    println!("=== Ordered Container Demo ===\n");

    let _ = example_basics();

    example_strings();

    example_orders();
}

fn example_basics() -> Result<(), ContainerError> {
    let mut container: Container = Container::new();

    println!("1. Initial state:");
    println!("   Size: {}", container.len());
    println!("   Is empty: {}", if container.is_empty() { "Yes" } else { "No" });

    println!("\n2. Adding elements: 10, 5, 20, 5, 15");
    for v in [10, 5, 20, 5, 15] {
        container.add(v);
    }
    println!("   Size after adding: {}", container.len());
    print!("   Container contents: ");
    container.print();

    println!("\n3. Removing element 5 (removes all occurrences):");
    container.remove(&5)?;
    println!("   Size after removing 5: {}", container.len());
    print!("   Container contents: ");
    container.print();

    println!("\n4. Error handling:");
    if let Err(e) = container.remove(&999) {
        println!("   Caught expected error: {e}");
    }

    Ok(())
}

fn example_strings() {
    println!("\n5. Strings:");
    let words: Container<&str> = ["Hello", "World", "Rust"].into_iter().collect();
    println!("   String container size: {}", words.len());
    println!("   String container contents: {words}");
}

fn example_orders() {
    println!("\n6. Traversal orders of [7, 15, 6, 1, 2]:");
    let container = Container::from_slice(&[7, 15, 6, 1, 2]);

    show("Ascending", &container.ascending_order());
    show("Descending", &container.descending_order());
    show("SideCross", &container.side_cross_order());
    show("Reverse", &container.reverse_order());
    show("Order", &container.order());
    show("MiddleOut", &container.middle_out_order());

    println!("\n=== Demo Complete ===");
}

fn show<A>(label: &str, view: &OrderView<i32, A>) {
    let rendered: Vec<String> = view.iter().map(ToString::to_string).collect();
    println!("   {label:<10} {}", rendered.join(" "));
}
