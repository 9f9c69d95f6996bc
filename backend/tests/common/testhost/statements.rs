//! Parsed statements as the host parser would hand them over.

use gatekeeper_commons::{OptionNames, RoleName, RoleSpec};
use gatekeeper_sql::ddl::{
    AlterRoleSetStatement, AlterRoleStatement, CopyStatement, CopyTarget, CreateExtensionStatement,
    CreateRoleStatement, DropRoleStatement, GrantRoleStatement, OptionValue, RoleOption,
    SetVariableStatement,
};
use gatekeeper_sql::{AdministrativeStatement, AdministrativeStatementKind as Kind};

pub fn alter_role_superuser(role: &str) -> AdministrativeStatement {
    AdministrativeStatement::new(
        format!("ALTER ROLE {} SUPERUSER", role),
        Kind::AlterRole(
            AlterRoleStatement::new(RoleSpec::from_identifier(role))
                .with_option(RoleOption::new(OptionNames::SUPERUSER, OptionValue::None)),
        ),
    )
}

pub fn alter_role_login(role: &str) -> AdministrativeStatement {
    AdministrativeStatement::new(
        format!("ALTER ROLE {} LOGIN", role),
        Kind::AlterRole(
            AlterRoleStatement::new(RoleSpec::from_identifier(role))
                .with_option(RoleOption::boolean(OptionNames::CAN_LOGIN, true)),
        ),
    )
}

pub fn alter_role_set(role: &str, name: &str, value: &str) -> AdministrativeStatement {
    AdministrativeStatement::new(
        format!("ALTER ROLE {} SET {} = '{}'", role, name, value),
        Kind::AlterRoleSet(AlterRoleSetStatement::new(
            Some(RoleSpec::from_identifier(role)),
            SetVariableStatement::set(name, value),
        )),
    )
}

pub fn create_superuser(role: &str) -> AdministrativeStatement {
    AdministrativeStatement::new(
        format!("CREATE ROLE {} SUPERUSER", role),
        Kind::CreateRole(
            CreateRoleStatement::new(role).with_option(RoleOption::boolean("superuser", true)),
        ),
    )
}

pub fn create_role_in(role: &str, parent: &str) -> AdministrativeStatement {
    AdministrativeStatement::new(
        format!("CREATE ROLE {} IN ROLE {}", role, parent),
        Kind::CreateRole(
            CreateRoleStatement::new(role).in_roles(vec![RoleSpec::from_identifier(parent)]),
        ),
    )
}

pub fn drop_role(role: &str) -> AdministrativeStatement {
    AdministrativeStatement::new(
        format!("DROP ROLE {}", role),
        Kind::DropRole(DropRoleStatement::new(vec![RoleSpec::from_identifier(role)])),
    )
}

pub fn grant(role: &str, to: &str) -> AdministrativeStatement {
    AdministrativeStatement::new(
        format!("GRANT {} TO {}", role, to),
        Kind::GrantRole(GrantRoleStatement::grant(
            vec![RoleName::new(role)],
            vec![RoleSpec::from_identifier(to)],
        )),
    )
}

pub fn revoke(role: &str, from: &str) -> AdministrativeStatement {
    AdministrativeStatement::new(
        format!("REVOKE {} FROM {}", role, from),
        Kind::GrantRole(GrantRoleStatement::revoke(
            vec![RoleName::new(role)],
            vec![RoleSpec::from_identifier(from)],
        )),
    )
}

pub fn copy_to_program(command: &str) -> AdministrativeStatement {
    AdministrativeStatement::new(
        format!("COPY t TO PROGRAM '{}'", command),
        Kind::Copy(CopyStatement::copy_to("t", CopyTarget::Program(command.to_string()))),
    )
}

pub fn copy_from_file(path: &str) -> AdministrativeStatement {
    AdministrativeStatement::new(
        format!("COPY t FROM '{}'", path),
        Kind::Copy(CopyStatement::copy_from("t", CopyTarget::File(path.to_string()))),
    )
}

pub fn copy_to_stdout() -> AdministrativeStatement {
    AdministrativeStatement::new(
        "COPY t TO STDOUT",
        Kind::Copy(CopyStatement::copy_to("t", CopyTarget::Stdio)),
    )
}

pub fn set_role(role: &str) -> AdministrativeStatement {
    AdministrativeStatement::new(
        format!("SET ROLE {}", role),
        Kind::SetSessionVariable(SetVariableStatement::set("role", role)),
    )
}

pub fn create_extension(name: &str) -> AdministrativeStatement {
    AdministrativeStatement::new(
        format!("CREATE EXTENSION {}", name),
        Kind::CreateExtension(CreateExtensionStatement::new(name)),
    )
}

pub fn vacuum() -> AdministrativeStatement {
    AdministrativeStatement::new("VACUUM", Kind::Other("VACUUM".to_string()))
}

pub fn create_superuser_in(role: &str, parent: &str) -> AdministrativeStatement {
    AdministrativeStatement::new(
        format!("CREATE ROLE {} SUPERUSER IN ROLE {}", role, parent),
        Kind::CreateRole(
            CreateRoleStatement::new(role)
                .with_option(RoleOption::boolean(OptionNames::SUPERUSER, true))
                .in_roles(vec![RoleSpec::from_identifier(parent)]),
        ),
    )
}

pub fn grant_all(roles: &[&str], to: &str) -> AdministrativeStatement {
    AdministrativeStatement::new(
        format!("GRANT {} TO {}", roles.join(", "), to),
        Kind::GrantRole(GrantRoleStatement::grant(
            roles.iter().map(|role| RoleName::new(*role)).collect(),
            vec![RoleSpec::from_identifier(to)],
        )),
    )
}
