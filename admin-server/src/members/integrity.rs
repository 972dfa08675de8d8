//! 引用完整性检查
//!
//! 每个创建/更新/删除在写入前都要通过这里的检查。检查在持有目录写锁的
//! 情况下同步执行，唯一性判断和随后的写入之间不会插入其他变更。

use shared::models::{
    Department, DepartmentCreate, DepartmentUpdate, Role, RoleCreate, RoleUpdate, User,
    UserCreate, UserUpdate,
};
use shared::{AppError, ErrorCode};

use crate::db::Directory;
use crate::utils::AppResult;
use crate::utils::validation::{
    self, MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_name,
    validate_optional_text, validate_required_text,
};

/// 角色/部门层级的取值范围
pub const LEVEL_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

fn check_level(level: u8, field: &str) -> AppResult<()> {
    if LEVEL_RANGE.contains(&level) {
        Ok(())
    } else {
        Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be between 1 and 10"),
        ))
    }
}

fn check_code(code: &str, field: &str) -> AppResult<()> {
    if validation::is_valid_code(code) {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "{field} may only contain uppercase letters and underscores"
        )))
    }
}

fn check_password(password: &Option<String>) -> AppResult<()> {
    if let Some(p) = password {
        validate_required_text(p, "password", MAX_PASSWORD_LEN)?;
    }
    Ok(())
}

// ==================== 用户 ====================

/// 创建用户前的检查；返回解析到的部门和角色
pub fn check_user_create(dir: &Directory, data: &UserCreate) -> AppResult<(Department, Role)> {
    validate_name(&data.name, "name")?;
    validate_required_text(&data.employee_id, "employeeId", 20)?;
    validate_required_text(&data.position, "position", MAX_NAME_LEN)?;
    check_password(&data.password)?;
    if !validation::is_valid_email(&data.email) {
        return Err(AppError::validation("email format is invalid"));
    }
    if !validation::is_valid_phone(&data.phone) {
        return Err(AppError::validation("phone format is invalid"));
    }

    if dir.users.values().any(|u| u.email == data.email) {
        return Err(AppError::new(ErrorCode::EmailExists));
    }
    if dir.users.values().any(|u| u.employee_id == data.employee_id) {
        return Err(AppError::new(ErrorCode::EmployeeIdExists));
    }

    let department = dir
        .departments
        .get(&data.department_id)
        .cloned()
        .ok_or_else(|| {
            AppError::not_found(
                ErrorCode::DepartmentNotFound,
                format!("Department {}", data.department_id),
            )
        })?;
    let role = dir.roles.get(&data.role_id).cloned().ok_or_else(|| {
        AppError::not_found(ErrorCode::RoleNotFound, format!("Role {}", data.role_id))
    })?;

    Ok((department, role))
}

/// 更新用户前的检查；返回换入的部门/角色 (如有变更)
pub fn check_user_update(
    dir: &Directory,
    existing: &User,
    data: &UserUpdate,
) -> AppResult<(Option<Department>, Option<Role>)> {
    if let Some(name) = &data.name {
        validate_name(name, "name")?;
    }
    if let Some(position) = &data.position {
        validate_required_text(position, "position", MAX_NAME_LEN)?;
    }
    check_password(&data.password)?;

    if let Some(email) = &data.email {
        if !validation::is_valid_email(email) {
            return Err(AppError::validation("email format is invalid"));
        }
        if dir
            .users
            .values()
            .any(|u| u.id != existing.id && &u.email == email)
        {
            return Err(AppError::with_message(
                ErrorCode::EmailExists,
                "Email already used by another user",
            ));
        }
    }
    if let Some(phone) = &data.phone
        && !validation::is_valid_phone(phone)
    {
        return Err(AppError::validation("phone format is invalid"));
    }
    if let Some(employee_id) = &data.employee_id {
        validate_required_text(employee_id, "employeeId", 20)?;
        if dir
            .users
            .values()
            .any(|u| u.id != existing.id && &u.employee_id == employee_id)
        {
            return Err(AppError::with_message(
                ErrorCode::EmployeeIdExists,
                "Employee id already used by another user",
            ));
        }
    }

    let department = match &data.department_id {
        Some(id) => Some(dir.departments.get(id).cloned().ok_or_else(|| {
            AppError::not_found(ErrorCode::DepartmentNotFound, format!("Department {id}"))
        })?),
        None => None,
    };
    let role = match &data.role_id {
        Some(id) => Some(
            dir.roles
                .get(id)
                .cloned()
                .ok_or_else(|| AppError::not_found(ErrorCode::RoleNotFound, format!("Role {id}")))?,
        ),
        None => None,
    };

    Ok((department, role))
}

// ==================== 角色 ====================

/// 创建角色前的检查
pub fn check_role_create(dir: &Directory, data: &RoleCreate) -> AppResult<()> {
    validate_name(&data.name, "name")?;
    check_code(&data.code, "code")?;
    validate_required_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
    check_level(data.level, "level")?;

    if dir.roles.values().any(|r| r.name == data.name) {
        return Err(AppError::new(ErrorCode::RoleNameExists));
    }
    if dir.roles.values().any(|r| r.code == data.code) {
        return Err(AppError::new(ErrorCode::RoleCodeExists));
    }
    Ok(())
}

/// 更新角色前的检查
pub fn check_role_update(dir: &Directory, existing: &Role, data: &RoleUpdate) -> AppResult<()> {
    if let Some(name) = &data.name {
        validate_name(name, "name")?;
        if dir
            .roles
            .values()
            .any(|r| r.id != existing.id && &r.name == name)
        {
            return Err(AppError::with_message(
                ErrorCode::RoleNameExists,
                "Role name already used by another role",
            ));
        }
    }
    if let Some(code) = &data.code {
        check_code(code, "code")?;
        if dir
            .roles
            .values()
            .any(|r| r.id != existing.id && &r.code == code)
        {
            return Err(AppError::with_message(
                ErrorCode::RoleCodeExists,
                "Role code already used by another role",
            ));
        }
    }
    if let Some(description) = &data.description {
        validate_required_text(description, "description", MAX_DESCRIPTION_LEN)?;
    }
    if let Some(level) = data.level {
        check_level(level, "level")?;
    }
    Ok(())
}

/// 删除角色前的检查；错误信息携带阻塞用户数
pub fn check_role_delete(dir: &Directory, role: &Role) -> AppResult<()> {
    let blocking = dir.users.values().filter(|u| u.role_id == role.id).count();
    if blocking > 0 {
        return Err(AppError::conflict(
            ErrorCode::RoleInUse,
            format!("Cannot delete role: {blocking} users still hold it"),
        )
        .with_detail("blockingUsers", blocking));
    }
    Ok(())
}

// ==================== 部门 ====================

fn check_department_common(dir: &Directory, exclude_id: Option<&str>, name: Option<&str>, code: Option<&str>) -> AppResult<()> {
    if let Some(name) = name
        && dir
            .departments
            .values()
            .any(|d| exclude_id != Some(d.id.as_str()) && d.name == name)
    {
        return Err(AppError::new(ErrorCode::DepartmentNameExists));
    }
    if let Some(code) = code
        && dir
            .departments
            .values()
            .any(|d| exclude_id != Some(d.id.as_str()) && d.code == code)
    {
        return Err(AppError::new(ErrorCode::DepartmentCodeExists));
    }
    Ok(())
}

/// 父子层级规则：父部门必须存在，且子层级严格大于父层级
fn check_parent(dir: &Directory, parent_id: &str, level: u8) -> AppResult<Department> {
    let parent = dir.departments.get(parent_id).cloned().ok_or_else(|| {
        AppError::not_found(
            ErrorCode::DepartmentNotFound,
            format!("Parent department {parent_id}"),
        )
    })?;
    if level <= parent.level {
        return Err(AppError::conflict(
            ErrorCode::DepartmentLevelInvalid,
            format!(
                "Child department level must exceed parent level ({} <= {})",
                level, parent.level
            ),
        ));
    }
    Ok(parent)
}

/// 沿父链向上查找 target；祖先链长度不会超过部门总数
fn is_ancestor(dir: &Directory, start: &str, target: &str) -> bool {
    let mut current = Some(start.to_string());
    let mut hops = 0;
    while let Some(id) = current {
        if id == target {
            return true;
        }
        hops += 1;
        if hops > dir.departments.len() {
            return true;
        }
        current = dir.departments.get(&id).and_then(|d| d.parent_id.clone());
    }
    false
}

/// 创建部门前的检查
pub fn check_department_create(dir: &Directory, data: &DepartmentCreate) -> AppResult<()> {
    validate_name(&data.name, "name")?;
    check_code(&data.code, "code")?;
    validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_required_text(&data.manager, "manager", MAX_NAME_LEN)?;
    check_level(data.level, "level")?;
    check_department_common(dir, None, Some(&data.name), Some(&data.code))?;

    if let Some(parent_id) = &data.parent_id {
        check_parent(dir, parent_id, data.level)?;
    }
    Ok(())
}

/// 更新部门前的检查 (含自引用与祖先环检测)
pub fn check_department_update(
    dir: &Directory,
    existing: &Department,
    data: &DepartmentUpdate,
) -> AppResult<()> {
    if let Some(name) = &data.name {
        validate_name(name, "name")?;
    }
    if let Some(code) = &data.code {
        check_code(code, "code")?;
    }
    validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
    if let Some(manager) = &data.manager {
        validate_required_text(manager, "manager", MAX_NAME_LEN)?;
    }
    if let Some(level) = data.level {
        check_level(level, "level")?;
    }
    check_department_common(
        dir,
        Some(&existing.id),
        data.name.as_deref(),
        data.code.as_deref(),
    )?;

    let parent_id = data.parent_id.as_ref().or(existing.parent_id.as_ref());
    if let Some(parent_id) = parent_id {
        if parent_id == &existing.id {
            return Err(AppError::conflict(
                ErrorCode::DepartmentCycle,
                "A department cannot be its own parent",
            ));
        }
        if is_ancestor(dir, parent_id, &existing.id) {
            return Err(AppError::new(ErrorCode::DepartmentCycle));
        }
        let level = data.level.unwrap_or(existing.level);
        check_parent(dir, parent_id, level)?;
    }
    Ok(())
}

/// 删除部门前的检查；成员和子部门各自报告阻塞数量
pub fn check_department_delete(dir: &Directory, department: &Department) -> AppResult<()> {
    let members = dir
        .users
        .values()
        .filter(|u| u.department_id == department.id)
        .count();
    if members > 0 {
        return Err(AppError::conflict(
            ErrorCode::DepartmentHasMembers,
            format!("Cannot delete department: {members} users still belong to it"),
        )
        .with_detail("blockingUsers", members));
    }

    let children = dir
        .departments
        .values()
        .filter(|d| d.parent_id.as_deref() == Some(department.id.as_str()))
        .count();
    if children > 0 {
        return Err(AppError::conflict(
            ErrorCode::DepartmentHasChildren,
            format!("Cannot delete department: {children} child departments remain"),
        )
        .with_detail("blockingChildren", children));
    }
    Ok(())
}
