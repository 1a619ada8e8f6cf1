use std::io::{BufRead, Write};

use business::domain::cart::errors::CartError;
use business::domain::cart::model::Cart;
use business::domain::cart::use_cases::add_item::AddItemParams;
use business::domain::cart::use_cases::remove_item::RemoveItemParams;
use business::domain::cart::use_cases::update_quantity::{
    QuantityAdjustment, UpdateQuantityParams,
};
use business::domain::shared::value_objects::ProductId;
use clap::error::ErrorKind;

use crate::setup::dependency_injection::DependencyContainer;
use crate::view::command::{Command, parse_command};
use crate::view::confirm::Confirmer;
use crate::view::error::{ErrorNotice, IntoErrorNotice};
use crate::view::likes::Likes;
use crate::view::render::render_cart;

const CONFIRM: &str = "Are you sure?";
const VALIDATED: &str = "Your order has been validated";
const CANCELLED: &str = "Your order has been cancelled";

#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Exit,
}

/// Read-eval-render loop over one cart.
///
/// Every mutation is followed by a full re-render from a fresh summary.
pub struct Session<R, W> {
    container: DependencyContainer,
    cart: Cart,
    likes: Likes,
    confirmer: Box<dyn Confirmer>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        container: DependencyContainer,
        cart: Cart,
        confirmer: Box<dyn Confirmer>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            container,
            cart,
            likes: Likes::default(),
            confirmer,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        self.refresh()?;

        while let Some(line) = self.prompt("> ")? {
            if line.is_empty() {
                continue;
            }
            if self.dispatch(&line)? == Flow::Exit {
                break;
            }
        }

        self.container.logger.info("Session ended");
        Ok(())
    }

    pub fn into_cart(self) -> Cart {
        self.cart
    }

    fn dispatch(&mut self, line: &str) -> anyhow::Result<Flow> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) if err.kind() == ErrorKind::DisplayHelp => {
                writeln!(self.output, "{}", err.render())?;
                return Ok(Flow::Continue);
            }
            Err(err) => {
                self.notice(err.into_error_notice())?;
                return Ok(Flow::Continue);
            }
        };

        let result = match command {
            Command::Add { id, quantity } => self
                .container
                .add_item
                .execute(
                    &mut self.cart,
                    AddItemParams {
                        product_id: id,
                        quantity,
                    },
                )
                .map(drop),
            Command::Increment { id } => self.adjust(id, QuantityAdjustment::Increment),
            Command::Decrement { id } => self.adjust(id, QuantityAdjustment::Decrement),
            Command::Set { id, quantity } => {
                self.adjust(id, QuantityAdjustment::Set(quantity))
            }
            Command::Remove { id } => self
                .container
                .remove_item
                .execute(&mut self.cart, RemoveItemParams { product_id: id })
                .map(drop),
            Command::Clear => {
                self.container.clear.execute(&mut self.cart);
                Ok(())
            }
            Command::Like { id } => {
                if self.container.catalog.get(&id).is_some() {
                    self.likes.toggle(&id);
                    Ok(())
                } else {
                    Err(CartError::UnknownProduct(id))
                }
            }
            Command::List => Ok(()),
            Command::Json => {
                let summary = self.container.get_summary.execute(&self.cart);
                writeln!(self.output, "{}", serde_json::to_string_pretty(&summary)?)?;
                return Ok(Flow::Continue);
            }
            Command::Validate => return self.finish(VALIDATED),
            Command::Cancel => return self.finish(CANCELLED),
            Command::Quit => return Ok(Flow::Exit),
        };

        match result {
            Ok(()) => self.refresh()?,
            Err(err) => self.notice(err.into_error_notice())?,
        }
        Ok(Flow::Continue)
    }

    fn adjust(
        &mut self,
        product_id: ProductId,
        adjustment: QuantityAdjustment,
    ) -> Result<(), CartError> {
        self.container
            .update_quantity
            .execute(
                &mut self.cart,
                UpdateQuantityParams {
                    product_id,
                    adjustment,
                },
            )
            .map(drop)
    }

    /// Asks for confirmation, then closes the session with `outcome`.
    fn finish(&mut self, outcome: &str) -> anyhow::Result<Flow> {
        if !self.confirmer.confirm(CONFIRM)? {
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "{}", outcome)?;
        self.container.logger.info(outcome);
        Ok(Flow::Exit)
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn refresh(&mut self) -> anyhow::Result<()> {
        let summary = self.container.get_summary.execute(&self.cart);
        write!(self.output, "{}", render_cart(&summary, &self.likes))?;
        Ok(())
    }

    fn notice(&mut self, notice: ErrorNotice) -> anyhow::Result<()> {
        writeln!(self.output, "{}", notice)?;
        Ok(())
    }
}
