use sovran_anyeq::{impl_sequence_eq, AnyValue, ComparerRegistry, EqualityError};

// A fixed-size history with no equality of its own
#[derive(Clone, Debug)]
struct History {
    entries: Vec<f64>,
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl_sequence_eq!(History);

fn main() -> Result<(), EqualityError> {
    env_logger::init();

    let morning = History {
        entries: vec![20.5, 21.0, 21.5],
    };
    let copy = morning.clone();
    let partial = History {
        entries: vec![20.5, 21.0],
    };

    println!("morning == copy: {}", morning == copy);
    println!("morning == partial: {}", morning == partial);

    let mut registry = ComparerRegistry::new();
    registry.register_sequence::<History>();

    let erased_morning = AnyValue::new(morning);
    let erased_partial = AnyValue::new(partial);
    println!(
        "erased morning == erased partial: {}",
        registry.equals(&erased_morning, &erased_partial)?
    );
    println!(
        "erased morning == itself: {}",
        registry.equals(&erased_morning, &erased_morning.clone())?
    );

    Ok(())
}
