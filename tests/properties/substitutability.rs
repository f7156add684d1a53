//! Property tests for the substitutability contract: the calculator is
//! agnostic to the concrete variant behind the `Shape` capability.

use proptest::prelude::*;

use planimeter::{AreaCalculator, Circle, Rectangle, Shape, Square};

fn length() -> impl Strategy<Value = f64> {
    0.0..=1e6_f64
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: For every variant, `AreaCalculator::area` returns exactly
    /// what the shape reports directly.
    #[test]
    fn property_calculator_delegates_to_the_shape(
        width in length(),
        height in length(),
        side in length(),
        radius in length(),
    ) {
        let calculator = AreaCalculator::new();

        let rect = Rectangle::new(width, height).unwrap();
        prop_assert_eq!(calculator.area(&rect), rect.area());

        let square = Square::new(side).unwrap();
        prop_assert_eq!(calculator.area(&square), square.area());

        let circle = Circle::new(radius).unwrap();
        prop_assert_eq!(calculator.area(&circle), circle.area());
    }

    /// PROPERTY: A shape behind a `&dyn Shape` reference reports the same
    /// area as the concrete value.
    #[test]
    fn property_dynamic_dispatch_preserves_area(
        width in length(),
        height in length(),
    ) {
        let rect = Rectangle::new(width, height).unwrap();
        let dynamic: &dyn Shape = &rect;
        prop_assert_eq!(dynamic.area(), rect.area());
    }

    /// PROPERTY: `total` equals the sum of the individual areas, whatever
    /// mix of variants the collection holds.
    #[test]
    fn property_total_is_sum_of_individual_areas(
        width in length(),
        height in length(),
        side in length(),
        radius in length(),
    ) {
        let calculator = AreaCalculator::new();
        let rect = Rectangle::new(width, height).unwrap();
        let square = Square::new(side).unwrap();
        let circle = Circle::new(radius).unwrap();

        let shapes: Vec<&dyn Shape> = vec![&rect, &square, &circle];
        let expected = rect.area() + square.area() + circle.area();
        prop_assert_eq!(calculator.total(shapes), expected);
    }
}
