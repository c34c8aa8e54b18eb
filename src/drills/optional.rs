//! Optional-chaining drills over dishes, cars and insurance lookups.

use std::fmt;
use std::sync::Arc;

use crate::fixtures::Menu;
use crate::optional::Optional;
use crate::records::{Car, Dish, Insurance};
use crate::sink::{OutputSink, StdOutSink};

/// Name reported by [`OptionalDrills::safe_other_service`].
pub const SAFE_SERVICE_INSURANCE: &str = "Amazon Insurance";

/// Optional drills that print go to the configured [`OutputSink`].
pub struct OptionalDrills {
    sink: Arc<dyn OutputSink>,
}

impl Default for OptionalDrills {
    fn default() -> Self {
        Self {
            sink: Arc::new(StdOutSink),
        }
    }
}

impl fmt::Debug for OptionalDrills {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionalDrills").finish_non_exhaustive()
    }
}

impl OptionalDrills {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send printed output to `sink` instead of stdout.
    pub fn with_sink(mut self, sink: Arc<dyn OutputSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Print the name of a vegetarian dish; print nothing if there is none.
    pub fn print_out_example_vegetarian_dish(&self, menu: &Menu) {
        menu.dishes
            .filter(Dish::is_vegetarian)
            .find_first()
            .if_present(|dish| self.sink.emit_line(dish.name()));
    }

    /// Name of a dish that may be missing.
    pub fn get_dish_name(dish: Option<&Dish>) -> Optional<String> {
        Optional::wrap(dish).map(|d| d.name.clone())
    }

    /// Name of the car's insurance, if the car exists and is insured.
    ///
    /// [`Car::insurance`] already returns an [`Optional`], so it is chained with `flat_map`.
    pub fn get_existing_insurance_name(car: Option<&Car>) -> Optional<String> {
        Optional::wrap(car)
            .flat_map(Car::insurance)
            .map(|i| i.name.clone())
    }

    /// Name of the cheapest insurance for a car that may be missing, using the nullable
    /// [`Self::other_service`] lookup.
    pub fn find_cheapest_insurance_name(car: Option<&Car>) -> Optional<String> {
        Optional::wrap(car)
            .flat_map_nullable(Self::other_service)
            .map(|i| i.name)
    }

    /// Name of the cheapest insurance for an already-wrapped car, using
    /// [`Self::safe_other_service`], which returns an [`Optional`] itself.
    pub fn find_cheapest_insurance_name_safe(car: Optional<&Car>) -> Optional<String> {
        car.flat_map(Self::safe_other_service).map(|i| i.name)
    }

    /// Legacy cheapest-insurance lookup. Signals "no result" with `None`, and never finds one.
    pub fn other_service(_car: &Car) -> Option<Insurance> {
        None
    }

    /// Cheapest-insurance lookup that always answers.
    pub fn safe_other_service(_car: &Car) -> Optional<Insurance> {
        Optional::of(Insurance::new(SAFE_SERVICE_INSURANCE))
    }
}
