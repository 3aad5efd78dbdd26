use super::*;

pub trait Internet {
    fn connect_to(&self, url: &str);
}

/// The real connection
pub struct AccessToInternet {
    console: Console,
}

impl AccessToInternet {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }
}

impl Internet for AccessToInternet {
    fn connect_to(&self, url: &str) {
        self.console.print_line(&format!("Conectando a {}", url));
    }
}

/// Stands in for AccessToInternet and refuses blocked URLs
pub struct ProxyInternet {
    console: Console,
    internet: AccessToInternet,
    blocked_urls: Vec<String>,
}

impl ProxyInternet {
    pub fn new(console: &Console, blocked_urls: Vec<String>) -> Self {
        Self {
            console: console.clone(),
            internet: AccessToInternet::new(console),
            blocked_urls,
        }
    }

    pub fn is_blocked(&self, url: &str) -> bool {
        self.blocked_urls.iter().any(|blocked| blocked == url)
    }
}

impl Internet for ProxyInternet {
    fn connect_to(&self, url: &str) {
        if self.is_blocked(url) {
            info!("proxy refused connection to {}", url);
            self.console
                .print_line(&format!("Intentando conectar {}", url));
            self.console
                .print_line("URL bloqueada - Accesso Denegado - Consulta a tu Administrador");
        } else {
            self.internet.connect_to(url);
        }
    }
}

pub fn run(ctx: &PageContext) -> Result<(), Box<dyn Error>> {
    let internet = ProxyInternet::new(&ctx.console, ctx.blocked_urls.clone());
    internet.connect_to("udemy.com");
    internet.connect_to("twitter.com");
    Ok(())
}
