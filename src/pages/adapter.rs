use super::*;

/// The interface clients expect: the sum as text
pub trait OperationTarget {
    fn sum_text(&self) -> String;
}

/// Existing code with a useful operation but the wrong interface
pub struct OperationAdaptee {
    a: i32,
    b: i32,
}

impl OperationAdaptee {
    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    /// Widened so it can't overflow
    pub fn sum(&self) -> i64 {
        i64::from(self.a) + i64::from(self.b)
    }
}

/// Presents an OperationAdaptee as an OperationTarget
pub struct OperationAdapter<'a> {
    adaptee: &'a OperationAdaptee,
}

impl<'a> OperationAdapter<'a> {
    pub fn new(adaptee: &'a OperationAdaptee) -> Self {
        Self { adaptee }
    }
}

impl OperationTarget for OperationAdapter<'_> {
    fn sum_text(&self) -> String {
        self.adaptee.sum().to_string()
    }
}

pub fn run(ctx: &PageContext) -> Result<(), Box<dyn Error>> {
    let adaptee = OperationAdaptee::new(3, 4);
    if adaptee.sum() == 7 {
        ctx.console.print_line("Ok int");
    }
    let target = OperationAdapter::new(&adaptee);
    if target.sum_text() == "7" {
        ctx.console.print_line("Ok String");
    }
    ctx.console.print_line(&target.sum_text());
    Ok(())
}
