use std::cell::Cell;

use rust_query_drills::drills::OptionalDrills;
use rust_query_drills::optional::{Optional, wrap};
use rust_query_drills::records::{Car, Insurance};

fn insured() -> Car {
    Car::new("Roadster", Some(Insurance::new("Cambridge Mutual")))
}

fn uninsured() -> Car {
    Car::new("Hatchback", None)
}

#[test]
fn flat_map_on_absent_never_invokes_step() {
    let calls = Cell::new(0);
    let counted_step = |v: i32| {
        calls.set(calls.get() + 1);
        Optional::of(v)
    };

    let out = Optional::<i32>::absent().flat_map(counted_step);

    assert!(out.is_absent());
    assert_eq!(calls.get(), 0);

    let out = Optional::of(2).flat_map(counted_step);
    assert_eq!(out, Optional::of(2));
    assert_eq!(calls.get(), 1);
}

#[test]
fn map_with_optional_step_nests_while_flat_map_does_not() {
    let car = insured();

    // The pitfall: `map` keeps the step's own Optional as the value.
    let nested: Optional<Optional<&Insurance>> = Optional::of(&car).map(Car::insurance);
    assert!(nested.is_present());
    assert_eq!(nested.map(|inner| inner.is_present()), Optional::of(true));

    // `flat_map` hands back the step's Optional as-is.
    let flat: Optional<&Insurance> = Optional::of(&car).flat_map(Car::insurance);
    assert_eq!(flat.map(Insurance::name), Optional::of("Cambridge Mutual"));

    // For an uninsured car the nested form still reports "present" at the outer level;
    // only the flat form reports the truth.
    let car = uninsured();
    assert!(Optional::of(&car).map(Car::insurance).is_present());
    assert!(Optional::of(&car).flat_map(Car::insurance).is_absent());
}

#[test]
fn uninsured_car_yields_absent_name() {
    let car = uninsured();
    let name = wrap(Some(&car))
        .flat_map(Car::insurance)
        .map(|i| i.name.clone());
    assert!(name.is_absent());

    let drilled = OptionalDrills::get_existing_insurance_name(Some(&car));
    assert!(drilled.is_absent());
}

#[test]
fn nullable_service_is_composed_once() {
    let car = insured();

    // The legacy service returns a plain Option; flat_map_nullable wraps it exactly once.
    let service = OptionalDrills::other_service;
    let step: Optional<Insurance> = wrap(Some(&car)).flat_map_nullable(service);
    assert!(step.is_absent());

    let name: Optional<String> = step.map(|i| i.name);
    let drilled = OptionalDrills::find_cheapest_insurance_name(Some(&car));
    assert_eq!(name, drilled);
    assert!(name.is_absent());
}

#[test]
fn optional_service_is_composed_with_flat_map() {
    let car = uninsured();

    let service = OptionalDrills::safe_other_service;
    let step: Optional<Insurance> = Optional::of(&car).flat_map(service);
    let name = step.map(|i| i.name);

    assert_eq!(name, Optional::of("Amazon Insurance".to_string()));
    let drilled = OptionalDrills::find_cheapest_insurance_name_safe(Optional::of(&car));
    assert_eq!(name, drilled);
}

#[test]
fn absent_car_short_circuits_both_services() {
    let calls = Cell::new(0);
    let counting_service = |c: &Car| {
        calls.set(calls.get() + 1);
        OptionalDrills::safe_other_service(c)
    };

    let name = Optional::<&Car>::absent().flat_map(counting_service).map(|i| i.name);

    assert!(name.is_absent());
    assert_eq!(calls.get(), 0);
    let drilled = OptionalDrills::find_cheapest_insurance_name(None);
    assert!(drilled.is_absent());
}
