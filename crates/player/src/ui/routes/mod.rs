//! Client-side routes

use dioxus::prelude::*;

mod posts;
mod wizard;

pub use posts::PostsRoute;
pub use wizard::WizardRoute;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    WizardRoute {},
    #[route("/posts")]
    PostsRoute {},
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_render_to_their_paths() {
        assert_eq!(Route::WizardRoute {}.to_string(), "/");
        assert_eq!(Route::PostsRoute {}.to_string(), "/posts");
    }

    #[test]
    fn paths_parse_back_to_routes() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::WizardRoute {}));
        assert_eq!("/posts".parse::<Route>().ok(), Some(Route::PostsRoute {}));
    }
}
