use super::*;

/// Snapshot of a traffic light, broadcast to everyone waiting at the crossing
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficLight {
    pub status: String,
}

impl TrafficLight {
    pub const CAR_GREEN: &'static str = "CAR_GREEN";
    pub const CAR_RED: &'static str = "CAR_RED";

    pub fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }

    pub fn is_car_red(&self) -> bool {
        self.status == Self::CAR_RED
    }
}

/// Waits at the crossing and may pass while cars have green
pub struct Car {
    console: Console,
}

impl Car {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }
}

impl Observer<TrafficLight> for Car {
    fn update(&self, light: &TrafficLight) -> Result<(), Box<dyn Error>> {
        if light.is_car_red() {
            self.console
                .print_line("Semaforo coche Rojo -> Coche NO puede pasar");
        } else {
            self.console
                .print_line("Semaforo coche Verde -> Coche SI puede pasar");
        }
        Ok(())
    }
}

/// Waits at the crossing and may pass while cars have red
pub struct Pedestrian {
    console: Console,
}

impl Pedestrian {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }
}

impl Observer<TrafficLight> for Pedestrian {
    fn update(&self, light: &TrafficLight) -> Result<(), Box<dyn Error>> {
        if light.is_car_red() {
            self.console
                .print_line("Semaforo peaton Verde -> PEATON SI puede pasar");
        } else {
            self.console
                .print_line("Semaforo peaton Rojo -> PEATON NO puede pasar");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (MockConsole, Rc<dyn Observer<TrafficLight>>, Rc<dyn Observer<TrafficLight>>) {
        let console = MockConsole::new();
        let car: Rc<dyn Observer<TrafficLight>> = Rc::new(Car::new(&console.get()));
        let pedestrian: Rc<dyn Observer<TrafficLight>> = Rc::new(Pedestrian::new(&console.get()));
        (console, car, pedestrian)
    }

    #[test]
    fn car_passes_on_green() {
        let (console, car, _) = setup();
        car.update(&TrafficLight::new(TrafficLight::CAR_GREEN))
            .unwrap();
        assert_eq!(
            console.lines(),
            vec!["Semaforo coche Verde -> Coche SI puede pasar"]
        );
    }

    #[test]
    fn car_stops_on_red() {
        let (console, car, _) = setup();
        car.update(&TrafficLight::new(TrafficLight::CAR_RED)).unwrap();
        assert_eq!(
            console.lines(),
            vec!["Semaforo coche Rojo -> Coche NO puede pasar"]
        );
    }

    #[test]
    fn pedestrian_passes_when_cars_have_red() {
        let (console, _, pedestrian) = setup();
        pedestrian
            .update(&TrafficLight::new(TrafficLight::CAR_RED))
            .unwrap();
        assert_eq!(
            console.lines(),
            vec!["Semaforo peaton Verde -> PEATON SI puede pasar"]
        );
    }

    #[test]
    fn unknown_status_counts_as_green_for_cars() {
        let (console, car, pedestrian) = setup();
        let light = TrafficLight::new("CARD_RED");
        car.update(&light).unwrap();
        pedestrian.update(&light).unwrap();
        assert_eq!(
            console.lines(),
            vec![
                "Semaforo coche Verde -> Coche SI puede pasar",
                "Semaforo peaton Rojo -> PEATON NO puede pasar",
            ]
        );
    }

    #[test]
    fn publisher_notifies_car_then_pedestrian() {
        let (console, car, pedestrian) = setup();
        let mut publisher = Publisher::new();
        publisher.add_observer(&car);
        publisher.add_observer(&pedestrian);
        publisher
            .notify_update(&TrafficLight::new(TrafficLight::CAR_GREEN))
            .unwrap();
        publisher
            .notify_update(&TrafficLight::new(TrafficLight::CAR_RED))
            .unwrap();
        assert_eq!(
            console.lines(),
            vec![
                "Semaforo coche Verde -> Coche SI puede pasar",
                "Semaforo peaton Rojo -> PEATON NO puede pasar",
                "Semaforo coche Rojo -> Coche NO puede pasar",
                "Semaforo peaton Verde -> PEATON SI puede pasar",
            ]
        );
    }
}
