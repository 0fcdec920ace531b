//! Roster repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `users` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `update_password` is an unconditional overwrite: no hashing, no
//!   old-password check, per the source design.
//! - Deletes are unconditional at this layer; protecting the seed Admin
//!   is an embedding-UI convention, not a data-layer rule.

use crate::model::user::{Role, User, UserDraft, UserId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const USER_SELECT_SQL: &str = "SELECT id, username, password, role FROM users";

/// Repository interface for roster operations.
pub trait UserRepository {
    fn add_user(&self, draft: &UserDraft) -> RepoResult<UserId>;
    fn get_user(&self, id: UserId) -> RepoResult<Option<User>>;
    fn list_users(&self) -> RepoResult<Vec<User>>;
    fn delete_user(&self, id: UserId) -> RepoResult<()>;
    fn update_password(&self, id: UserId, new_password: &str) -> RepoResult<()>;
}

/// SQLite-backed roster repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn add_user(&self, draft: &UserDraft) -> RepoResult<UserId> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO users (username, password, role) VALUES (?1, ?2, ?3);",
            params![
                draft.username.as_str(),
                draft.password.as_str(),
                role_to_db(draft.role)
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_user(&self, id: UserId) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }

        Ok(None)
    }

    fn list_users(&self) -> RepoResult<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut users = Vec::new();

        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }

        Ok(users)
    }

    fn delete_user(&self, id: UserId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM users WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::UserNotFound(id));
        }
        Ok(())
    }

    fn update_password(&self, id: UserId, new_password: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE users SET password = ?1 WHERE id = ?2;",
            params![new_password, id],
        )?;
        if changed == 0 {
            return Err(RepoError::UserNotFound(id));
        }
        Ok(())
    }
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    let role_text: String = row.get("role")?;
    let role = parse_role(&role_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid role `{role_text}` in users.role"))
    })?;

    Ok(User {
        id: row.get("id")?,
        username: row.get("username")?,
        password: row.get("password")?,
        role,
    })
}

fn role_to_db(role: Role) -> &'static str {
    match role {
        Role::Admin => "Admin",
        Role::Librarian => "Librarian",
        Role::Student => "Student",
    }
}

fn parse_role(value: &str) -> Option<Role> {
    match value {
        "Admin" => Some(Role::Admin),
        "Librarian" => Some(Role::Librarian),
        "Student" => Some(Role::Student),
        _ => None,
    }
}
