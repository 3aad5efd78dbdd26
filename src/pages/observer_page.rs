use super::*;

/// A car and a pedestrian watch the same traffic light, which turns red for cars halfway through
pub fn run(ctx: &PageContext) -> Result<(), Box<dyn Error>> {
    let car: Rc<dyn Observer<TrafficLight>> = Rc::new(Car::new(&ctx.console));
    let pedestrian: Rc<dyn Observer<TrafficLight>> = Rc::new(Pedestrian::new(&ctx.console));
    let mut publisher = Publisher::new();
    publisher.add_observer(&car);
    publisher.add_observer(&pedestrian);

    let mut traffic_light = TrafficLight::new(TrafficLight::CAR_GREEN);
    publisher.notify_update(&traffic_light)?;

    if let Some(pause) = ctx.observer_pause {
        std::thread::sleep(pause);
    }
    ctx.console.print_line("After sleep");

    traffic_light = TrafficLight::new(TrafficLight::CAR_RED);
    publisher.notify_update(&traffic_light)?;
    Ok(())
}
