use super::*;

/// The one card service the program needs. Rather than a process wide static, it is constructed
/// once by the caller and handed to whoever needs it.
pub struct CardService {
    console: Console,
}

impl CardService {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }

    pub fn do_something(&self) {
        self.console
            .print_line("Haciendo trabajo de la clase Singleton");
    }
}

/// A consumer that was given the shared service
pub struct CardHolder {
    service: Rc<CardService>,
}

impl CardHolder {
    pub fn new(service: &Rc<CardService>) -> Self {
        Self {
            service: service.clone(),
        }
    }

    pub fn shares_service_with(&self, other: &CardHolder) -> bool {
        Rc::ptr_eq(&self.service, &other.service)
    }

    pub fn use_card(&self) {
        self.service.do_something();
    }
}

pub fn run(ctx: &PageContext) -> Result<(), Box<dyn Error>> {
    let service = Rc::new(CardService::new(&ctx.console));
    let first = CardHolder::new(&service);
    let second = CardHolder::new(&service);
    if first.shares_service_with(&second) {
        ctx.console.print_line("La instancia1 es la misma que la 2");
    }
    second.use_card();
    Ok(())
}
