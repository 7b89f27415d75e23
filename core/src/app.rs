//! Route-based view switching.
//!
//! # Design
//! `App` owns the API and exactly one mounted screen. Every navigation
//! throws the current screen away and mounts a fresh one, so no product data
//! survives a route change except what the server returns again. User
//! actions are dispatched to whichever screen is mounted; navigation a
//! screen asks for is carried out here.

use tracing::debug;

use crate::api::ProductApi;
use crate::error::{ActionError, RouteError};
use crate::form_view::{Field, FormView};
use crate::http::Transport;
use crate::list_view::ListView;
use crate::route::Route;
use crate::types::ProductId;

/// The mounted view.
#[derive(Debug, Clone)]
pub enum Screen {
    List(ListView),
    Form(FormView),
}

/// Something the user can do on a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Create,
    Edit(ProductId),
    Delete(ProductId),
    SetField(Field, String),
    Submit,
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Edit(_) => "edit",
            Action::Delete(_) => "delete",
            Action::SetField(..) => "set",
            Action::Submit => "submit",
        }
    }
}

#[derive(Debug)]
pub struct App<T> {
    api: ProductApi<T>,
    route: Route,
    screen: Screen,
}

impl<T: Transport> App<T> {
    /// Start on the list route with the list mounted.
    pub fn new(api: ProductApi<T>) -> Self {
        Self::at(api, Route::List)
    }

    /// Start on `route` with its screen mounted.
    pub fn at(api: ProductApi<T>, route: Route) -> Self {
        let mut app = Self {
            api,
            route,
            screen: Screen::List(ListView::new()),
        };
        app.navigate(route);
        app
    }

    pub fn api(&self) -> &ProductApi<T> {
        &self.api
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Replace the mounted screen with a freshly mounted one for `route`.
    pub fn navigate(&mut self, route: Route) {
        debug!(from = %self.route, to = %route, "navigating");
        self.screen = match route {
            Route::List => {
                let mut view = ListView::new();
                view.mount(&self.api);
                Screen::List(view)
            }
            Route::Create | Route::Edit(_) => {
                let mut view = FormView::new(route.product_id());
                view.mount(&self.api);
                Screen::Form(view)
            }
        };
        self.route = route;
    }

    pub fn open(&mut self, path: &str) -> Result<(), RouteError> {
        let route = path.parse()?;
        self.navigate(route);
        Ok(())
    }

    pub fn dispatch(&mut self, action: Action) -> Result<(), ActionError> {
        let next = match (&mut self.screen, action) {
            (Screen::List(view), Action::Create) => Some(view.create()),
            (Screen::List(view), Action::Edit(id)) => Some(view.edit(id)),
            (Screen::List(view), Action::Delete(id)) => {
                view.delete(&self.api, id);
                None
            }
            (Screen::Form(view), Action::SetField(field, value)) => {
                view.set_field(field, &value);
                None
            }
            (Screen::Form(view), Action::Submit) => view.submit(&self.api),
            (_, action) => {
                return Err(ActionError::Unavailable {
                    action: action.name(),
                    route: self.route,
                })
            }
        };
        if let Some(route) = next {
            self.navigate(route);
        }
        Ok(())
    }

    pub fn render(&self) -> String {
        match &self.screen {
            Screen::List(view) => view.render(),
            Screen::Form(view) => view.render(),
        }
    }
}
