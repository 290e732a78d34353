use serde::{Deserialize, Serialize};

// Lo que guardamos en memoria (no hay contraseñas: el login es de demostración)
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
}

// Lo que recibimos para hacer Login (JSON o formulario; los campos ausentes
// simplemente no coinciden con las credenciales)
#[derive(Debug, Default, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

// Lo que devolvemos cuando el login es exitoso
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: PublicUser,
}

// Forma pública del usuario: `id` en lugar de `_id`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PublicUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

// Lo que el middleware de autenticación simulado adjunta a la petición
#[derive(Debug, Clone, PartialEq)]
pub struct Claims {
    pub user_id: String,
    pub role: String,
}
