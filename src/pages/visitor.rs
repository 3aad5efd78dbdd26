use super::*;

/// Each card type gives its own discount per kind of offer
pub trait CreditCardVisitor {
    fn visit_gasoline_offer(&self, offer: &GasolineOffer);
    fn visit_flight_offer(&self, offer: &FlightOffer);
}

pub trait OfferElement {
    fn accept(&self, visitor: &dyn CreditCardVisitor);
}

pub struct GasolineOffer;

impl OfferElement for GasolineOffer {
    fn accept(&self, visitor: &dyn CreditCardVisitor) {
        visitor.visit_gasoline_offer(self);
    }
}

pub struct FlightOffer;

impl OfferElement for FlightOffer {
    fn accept(&self, visitor: &dyn CreditCardVisitor) {
        visitor.visit_flight_offer(self);
    }
}

pub struct ClassicCreditCardVisitor {
    console: Console,
}

impl ClassicCreditCardVisitor {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }
}

impl CreditCardVisitor for ClassicCreditCardVisitor {
    fn visit_gasoline_offer(&self, _: &GasolineOffer) {
        self.console
            .print_line("Descuento 3% en Gasolina con tu tarjeta clasica");
    }

    fn visit_flight_offer(&self, _: &FlightOffer) {
        self.console
            .print_line("Descuento 5% en vuelos con tu tarjeta clasica");
    }
}

pub struct BlackCreditCardVisitor {
    console: Console,
}

impl BlackCreditCardVisitor {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }
}

impl CreditCardVisitor for BlackCreditCardVisitor {
    fn visit_gasoline_offer(&self, _: &GasolineOffer) {
        self.console
            .print_line("Descuento 10% en Gasolina con tu tarjeta Black");
    }

    fn visit_flight_offer(&self, _: &FlightOffer) {
        self.console
            .print_line("Descuento 25% en Vuelos con tu tarjeta Black");
    }
}

pub fn run(ctx: &PageContext) -> Result<(), Box<dyn Error>> {
    let offer = GasolineOffer;
    offer.accept(&BlackCreditCardVisitor::new(&ctx.console));
    Ok(())
}
