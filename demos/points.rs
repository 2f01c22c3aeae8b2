use sovran_anyeq::{AnyValue, ComparerRegistry, EqualityError};

#[derive(Clone, Debug)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Clone, Debug)]
struct Label(String);

fn main() -> Result<(), EqualityError> {
    env_logger::init();

    let mut registry = ComparerRegistry::new();
    registry.register(|a: &Point, b: &Point| a.x == b.x && a.y == b.y);

    let values = vec![
        AnyValue::new(Point { x: 1, y: 2 }),
        AnyValue::new(42i32),
        AnyValue::new(String::from("origin")),
        AnyValue::new(Label("unregistered".to_string())),
    ];

    let probes = [
        AnyValue::new(Point { x: 1, y: 2 }),
        AnyValue::new(Point { x: 1, y: 3 }),
        AnyValue::new(42i32),
        AnyValue::new(42u32),
        AnyValue::new(Label("unregistered".to_string())),
    ];

    for probe in &probes {
        for value in &values {
            match registry.equals(probe, value) {
                Ok(true) => println!("{:?} == {:?}", probe, value),
                Ok(false) => {}
                Err(EqualityError::UnregisteredComparer { type_name }) => {
                    println!("No comparer for {}, registering one", type_name)
                }
                Err(e) => return Err(e),
            }
        }
    }

    // Now make Label comparable and try again
    registry.register(|a: &Label, b: &Label| a.0 == b.0);
    let found = values
        .iter()
        .map(|v| registry.bind(v))
        .position(|v| v == probes[4]);
    println!("Label found at {:?}", found);

    Ok(())
}
