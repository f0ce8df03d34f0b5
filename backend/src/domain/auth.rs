//! Registration and login request primitives.
//!
//! Inbound adapters turn raw form values into these types before calling a
//! driving port, so services only ever see validated input.

use std::fmt;

use zeroize::Zeroizing;

use super::user::{EmailAddress, UserName, UserRole};

/// Form field that failed presence validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Name,
    Email,
    Password,
    Role,
}

impl CredentialField {
    /// Field name as it appears in the portal forms.
    pub fn form_name(self) -> &'static str {
        match self {
            Self::Name => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Role => "Role",
        }
    }
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_name())
    }
}

/// Returned when a registration or login payload lacks a required value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField(pub CredentialField);

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} must not be empty", self.0)
    }
}

impl std::error::Error for MissingField {}

fn required_password(password: &str) -> Result<Zeroizing<String>, MissingField> {
    if password.is_empty() {
        return Err(MissingField(CredentialField::Password));
    }
    Ok(Zeroizing::new(password.to_owned()))
}

/// Validated registration request.
///
/// ## Invariants
/// - Name, email and role are non-empty once trimmed; email is normalised.
/// - The password is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use backend::domain::Registration;
///
/// let request = Registration::try_from_parts("Ada", "ADA@example.com", "pw", "applicant").unwrap();
/// assert_eq!(request.email().as_ref(), "ada@example.com");
/// ```
#[derive(Debug, Clone)]
pub struct Registration {
    name: UserName,
    email: EmailAddress,
    password: Zeroizing<String>,
    role: UserRole,
}

impl Registration {
    /// Validate raw fields in form order, reporting the first missing one.
    pub fn try_from_parts(
        name: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<Self, MissingField> {
        let name = UserName::new(name).map_err(|_| MissingField(CredentialField::Name))?;
        let email = EmailAddress::new(email).map_err(|_| MissingField(CredentialField::Email))?;
        let password = required_password(password)?;
        let role = UserRole::new(role).map_err(|_| MissingField(CredentialField::Role))?;
        Ok(Self {
            name,
            email,
            password,
            role,
        })
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Plaintext password awaiting hashing.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    pub fn role(&self) -> &UserRole {
        &self.role
    }
}

/// Validated login credentials.
///
/// # Examples
/// ```
/// use backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" Ada@Example.com ", "secret").unwrap();
/// assert_eq!(creds.email().as_ref(), "ada@example.com");
/// assert_eq!(creds.password(), "secret");
/// ```
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, MissingField> {
        let email = EmailAddress::new(email).map_err(|_| MissingField(CredentialField::Email))?;
        let password = required_password(password)?;
        Ok(Self { email, password })
    }

    /// Normalised email used for the account lookup.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "a@b.c", "pw", "applicant", CredentialField::Name)]
    #[case("Ada", "  ", "pw", "applicant", CredentialField::Email)]
    #[case("Ada", "a@b.c", "", "applicant", CredentialField::Password)]
    #[case("Ada", "a@b.c", "pw", "", CredentialField::Role)]
    #[case("", "", "", "", CredentialField::Name)]
    fn registration_reports_first_missing_field(
        #[case] name: &str,
        #[case] email: &str,
        #[case] password: &str,
        #[case] role: &str,
        #[case] expected: CredentialField,
    ) {
        let err = Registration::try_from_parts(name, email, password, role)
            .expect_err("incomplete registration must fail");
        assert_eq!(err, MissingField(expected));
    }

    #[rstest]
    fn registration_keeps_password_whitespace() {
        let request = Registration::try_from_parts(" Ada ", "Ada@Example.com", " pw ", "official")
            .expect("complete registration");
        assert_eq!(request.name().as_ref(), "Ada");
        assert_eq!(request.email().as_ref(), "ada@example.com");
        assert_eq!(request.password(), " pw ");
        assert_eq!(request.role().as_ref(), "official");
    }

    #[rstest]
    #[case("", "pw", CredentialField::Email)]
    #[case("ada@example.com", "", CredentialField::Password)]
    fn login_requires_both_fields(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: CredentialField,
    ) {
        let err = LoginCredentials::try_from_parts(email, password).expect_err("must fail");
        assert_eq!(err, MissingField(expected));
        assert_eq!(err.to_string(), format!("{} must not be empty", expected.form_name()));
    }
}
