use central_types::RouteInfo;

/// Site pages addressable by path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Index,
    Login,
    Signup,
    Onboarding,
    Lobby,
    HostGame,
    Game { match_id: String },
    NotFound,
}

impl Route {
    /// Resolve a path, ignoring any query string, fragment or trailing slash.
    pub fn resolve(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        match path {
            "" => Route::Index,
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/onboarding" => Route::Onboarding,
            "/lobby" => Route::Lobby,
            "/host-game" => Route::HostGame,
            other => match other.strip_prefix("/game/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::Game {
                    match_id: id.to_string(),
                },
                _ => Route::NotFound,
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Index => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Onboarding => "/onboarding".to_string(),
            Route::Lobby => "/lobby".to_string(),
            Route::HostGame => "/host-game".to_string(),
            Route::Game { match_id } => format!("/game/{match_id}"),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn page_name(&self) -> &'static str {
        match self {
            Route::Index => "index",
            Route::Login => "login",
            Route::Signup => "signup",
            Route::Onboarding => "onboarding",
            Route::Lobby => "lobby",
            Route::HostGame => "host-game",
            Route::Game { .. } => "game",
            Route::NotFound => "not-found",
        }
    }

    pub fn info(&self) -> RouteInfo {
        RouteInfo {
            path: self.path(),
            page: self.page_name().to_string(),
            match_id: match self {
                Route::Game { match_id } => Some(match_id.clone()),
                _ => None,
            },
        }
    }
}
