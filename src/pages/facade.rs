use super::*;

/// One of the subsystems hidden behind the facade
pub trait CreditModule {
    fn show_credit(&self, console: &Console);
}

pub struct BlackModule;
pub struct GoldModule;
pub struct SilverModule;

impl CreditModule for BlackModule {
    fn show_credit(&self, console: &Console) {
        console.print_line("La tarjeta Black tiene un credito de un 1.000.000");
    }
}

impl CreditModule for GoldModule {
    fn show_credit(&self, console: &Console) {
        console.print_line("La tarjeta Gold tiene un credito de 50.000");
    }
}

impl CreditModule for SilverModule {
    fn show_credit(&self, console: &Console) {
        console.print_line("La tarjeta Silver tiene un credito de 50.000");
    }
}

/// Single entry point so clients don't have to know about the individual modules
pub struct CreditMarketFacade {
    console: Console,
    black: BlackModule,
    gold: GoldModule,
    silver: SilverModule,
}

impl CreditMarketFacade {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
            black: BlackModule,
            gold: GoldModule,
            silver: SilverModule,
        }
    }

    pub fn show_credit_black(&self) {
        self.black.show_credit(&self.console);
    }

    pub fn show_credit_gold(&self) {
        self.gold.show_credit(&self.console);
    }

    pub fn show_credit_silver(&self) {
        self.silver.show_credit(&self.console);
    }
}

pub fn run(ctx: &PageContext) -> Result<(), Box<dyn Error>> {
    let facade = CreditMarketFacade::new(&ctx.console);
    facade.show_credit_black();
    facade.show_credit_gold();
    facade.show_credit_silver();
    Ok(())
}
