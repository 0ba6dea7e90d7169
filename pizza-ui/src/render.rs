//! Plain-text rendering of an [`OrderView`].

use std::fmt;

use pizza_core::OrderView;

const RADIO_ON: &str = "(*)";
const RADIO_OFF: &str = "( )";
const CHECK_ON: &str = "[x]";
const CHECK_OFF: &str = "[ ]";

/// The order screen: pizzas, sizes, toppings (once a pizza is chosen) and
/// the price line. The last line has no trailing newline.
pub struct Screen<'a>(pub &'a OrderView);

impl fmt::Display for Screen<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let view = self.0;

        writeln!(f, "Pizza")?;
        for pizza in &view.pizzas {
            let mark = if pizza.selected { RADIO_ON } else { RADIO_OFF };
            writeln!(f, "  {mark} {:<12} ${}", pizza.name, pizza.price)?;
        }

        writeln!(f, "Size")?;
        for size in &view.sizes {
            let mark = if size.selected { RADIO_ON } else { RADIO_OFF };
            writeln!(f, "  {mark} {}", size.name)?;
        }

        if view.show_toppings {
            writeln!(f, "Toppings")?;
            for topping in &view.toppings {
                let mark = if topping.selected { CHECK_ON } else { CHECK_OFF };
                writeln!(f, "  {mark} {}", topping.name)?;
            }
        }

        writeln!(f, "Price")?;
        write!(f, "  $ {}", view.total)
    }
}
