use crate::DbConn;
use crate::{
    config::JwtConfig,
    error::{Error, Result},
    models::users::{LoginResult, LoginUser, NewUser, RegisterUser, User},
    queries::users,
    services::jwt,
    validation,
};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::ExposeSecret;

/// Registers a new user with input validation and password hashing
pub async fn register_user(conn: &mut DbConn, register_user: RegisterUser) -> Result<User> {
    validation::validate_username(&register_user.username)?;
    validation::validate_email(&register_user.email)?;
    validation::validate_password(&register_user.password)?;

    // Pre-insert existence check; the unique indexes catch concurrent races.
    if users::username_or_email_exists(conn, &register_user.username, &register_user.email).await? {
        return Err(Error::Conflict(
            "Username or email already exists".to_string(),
        ));
    }

    let password_hash = generate_password_hash(&register_user.password)?;

    let new_user = NewUser {
        username: register_user.username,
        email: register_user.email.trim().to_string(),
        password_hash,
    };

    let user = users::create_user(conn, new_user).await?;

    Ok(user)
}

/// Authenticates a user and issues a bearer token
///
/// Unknown usernames and wrong passwords produce the same generic error so
/// the response does not reveal which accounts exist.
pub async fn login_user(
    conn: &mut DbConn,
    login_user: LoginUser,
    jwt_config: &JwtConfig,
) -> Result<LoginResult> {
    let user = users::get_user_by_username(conn, &login_user.username)
        .await?
        .ok_or_else(|| Error::Authentication("Invalid credentials".to_string()))?;

    if !verify_password(&login_user.password, &user.password_hash)? {
        return Err(Error::Authentication("Invalid credentials".to_string()));
    }

    let token = jwt::generate_jwt(
        user.id,
        jwt_config.secret.expose_secret(),
        jwt_config.expiration_hours,
    )?;

    Ok(LoginResult {
        token,
        user_id: user.id,
    })
}

/// Hashes a password with Argon2 and a fresh random salt
pub fn generate_password_hash(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();

    Ok(password_hash)
}

/// Verifies a password against a stored password hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| Error::Internal(format!("Invalid password hash: {}", e)))?;

    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(Error::Internal(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}
