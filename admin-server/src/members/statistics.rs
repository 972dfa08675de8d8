//! 成员统计
//!
//! 统计口径直接从源数据重新计算，不读缓存计数。

use shared::models::{
    DepartmentUserStat, MemberStatistics, RecentUser, RoleUserStat, TotalCount, UserStatus,
    UserStatusCounts,
};

use crate::db::Database;

/// 汇总成员管理统计信息
pub async fn member_statistics(db: &Database) -> MemberStatistics {
    let dir = db.directory.read().await;

    let users: Vec<_> = dir.users.list();
    let count_status =
        |status: UserStatus| users.iter().filter(|u| u.status == status).count() as u32;

    let department_stats = dir
        .departments
        .list()
        .into_iter()
        .map(|dept| DepartmentUserStat {
            user_count: users.iter().filter(|u| u.department_id == dept.id).count() as u32,
            department_id: dept.id,
            department_name: dept.name,
        })
        .collect();

    let role_stats = dir
        .roles
        .list()
        .into_iter()
        .map(|role| RoleUserStat {
            user_count: users.iter().filter(|u| u.role_id == role.id).count() as u32,
            role_id: role.id,
            role_name: role.name,
        })
        .collect();

    // 最近加入的 5 人
    let mut recent: Vec<_> = users.iter().collect();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
    let recent_users = recent
        .into_iter()
        .take(5)
        .map(|u| RecentUser {
            id: u.id.clone(),
            name: u.name.clone(),
            department: u.department.clone(),
            join_date: u.join_date.date_naive(),
        })
        .collect();

    MemberStatistics {
        users: UserStatusCounts {
            total: users.len() as u32,
            active: count_status(UserStatus::Active),
            pending: count_status(UserStatus::Pending),
            disabled: count_status(UserStatus::Disabled),
        },
        roles: TotalCount {
            total: dir.roles.len() as u32,
        },
        departments: TotalCount {
            total: dir.departments.len() as u32,
        },
        department_stats,
        role_stats,
        recent_users,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_statistics_recomputed_from_source() {
        let db = Database::seeded();
        let stats = member_statistics(&db).await;

        assert_eq!(stats.users.total, 5);
        assert_eq!(stats.users.active, 4);
        assert_eq!(stats.users.pending, 1);
        assert_eq!(stats.users.disabled, 0);
        assert_eq!(stats.roles.total, 4);
        assert_eq!(stats.departments.total, 4);
        assert_eq!(stats.recent_users.len(), 5);
        // 最近加入的排最前 (user_4 入职 10 天)
        assert_eq!(stats.recent_users[0].id, "user_4");

        let tech = stats
            .department_stats
            .iter()
            .find(|d| d.department_name == "Technology")
            .expect("tech stats");
        assert_eq!(tech.user_count, 2);
    }
}
