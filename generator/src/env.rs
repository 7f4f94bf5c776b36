//! `.env` renderer.

use crate::config::EnvDefaults;

/// Renders the `.env` file with `DB_NAME` set to `database`.
///
/// # Examples
///
/// ```
/// use crudgen_generator::config::EnvDefaults;
/// use crudgen_generator::env::render_env;
///
/// let env = render_env("shop", &EnvDefaults::default());
/// assert!(env.ends_with("DB_NAME=shop\n"));
/// ```
pub fn render_env(database: &str, defaults: &EnvDefaults) -> String {
    format!(
        "PORT={}\nDB_HOST={}\nDB_PORT={}\nDB_USER={}\nDB_PASSWORD={}\nDB_NAME={}\n",
        defaults.port,
        defaults.db_host,
        defaults.db_port,
        defaults.db_user,
        defaults.db_password,
        database,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_env() {
        assert_eq!(
            render_env("todo_list", &EnvDefaults::default()),
            "PORT=3000\nDB_HOST=localhost\nDB_PORT=3306\nDB_USER=root\nDB_PASSWORD=\nDB_NAME=todo_list\n"
        );
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = EnvDefaults {
            port: 8080,
            db_user: "app".to_string(),
            db_password: "secret".to_string(),
            ..EnvDefaults::default()
        };
        let env = render_env("shop", &defaults);
        assert!(env.starts_with("PORT=8080\n"));
        assert!(env.contains("DB_USER=app\nDB_PASSWORD=secret\n"));
    }
}
