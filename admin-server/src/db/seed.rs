//! Startup fixtures
//!
//! Demo data for the in-memory store, mirroring what the admin frontend
//! expects on first load. Seeded accounts with passwords:
//!
//! | login (email or employee id) | password   | role             |
//! |------------------------------|------------|------------------|
//! | bob.li@company.com / U002    | admin123   | Super Admin      |
//! | carol.wang@company.com       | carol123   | Department Admin |
//! | alice.chen@company.com       | dev12345   | Developer        |

use chrono::{Duration, NaiveDate, Utc};
use shared::models::{
    AccountApplication, ApplicationStatus, Branch, BranchKind, BranchStatus, CodeReview,
    Department, Deployment, DeploymentStatus, EntityStatus, Milestone, MilestoneStatus, OrgNode,
    OrgNodeKind, Permission, PermissionKind, PermissionSet, Project, ProjectStatus, Release,
    ReleasePriority, ReleaseStatus, ReportRelation, ReviewStatus, Role, StatCard, TaskSummary,
    TestStatus, User, UserStatus,
};

use super::{DashboardStore, Database, Directory, ProjectStore, ReleaseStore};

/// Build a fully seeded database
pub fn seed() -> Database {
    Database {
        directory: tokio::sync::RwLock::new(directory()),
        projects: tokio::sync::RwLock::new(project_store()),
        releases: tokio::sync::RwLock::new(release_store()),
        dashboard: tokio::sync::RwLock::new(dashboard_store()),
    }
}

fn perm(id: &str, name: &str, kind: PermissionKind, parent: Option<&str>, level: u8) -> Permission {
    Permission {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        parent_id: parent.map(str::to_string),
        level,
    }
}

/// The static permission catalog
pub fn permission_catalog() -> Vec<Permission> {
    use PermissionKind::{Button, Menu};
    vec![
        // System administration
        perm("system", "System", Menu, None, 1),
        perm("user", "User Management", Menu, Some("system"), 2),
        perm("user.read", "View Users", Button, Some("user"), 3),
        perm("user.create", "Create Users", Button, Some("user"), 3),
        perm("user.update", "Edit Users", Button, Some("user"), 3),
        perm("user.delete", "Delete Users", Button, Some("user"), 3),
        perm("role", "Role Management", Menu, Some("system"), 2),
        perm("role.read", "View Roles", Button, Some("role"), 3),
        perm("role.create", "Create Roles", Button, Some("role"), 3),
        perm("role.update", "Edit Roles", Button, Some("role"), 3),
        perm("role.delete", "Delete Roles", Button, Some("role"), 3),
        perm("dept", "Department Management", Menu, Some("system"), 2),
        perm("dept.read", "View Departments", Button, Some("dept"), 3),
        perm("dept.create", "Create Departments", Button, Some("dept"), 3),
        perm("dept.update", "Edit Departments", Button, Some("dept"), 3),
        perm("dept.delete", "Delete Departments", Button, Some("dept"), 3),
        // Business
        perm("business", "Business", Menu, None, 1),
        perm("project", "Project Management", Menu, Some("business"), 2),
        perm("project.read", "View Projects", Button, Some("project"), 3),
        perm("project.create", "Create Projects", Button, Some("project"), 3),
        perm("project.update", "Edit Projects", Button, Some("project"), 3),
    ]
}

fn directory() -> Directory {
    let now = Utc::now();
    let mut dir = Directory::new();

    dir.permissions = permission_catalog();

    // Roles
    let roles = [
        (
            "role_1",
            "Super Admin",
            "SUPER_ADMIN",
            "Unrestricted access to every system feature",
            PermissionSet::All,
            1,
            365,
        ),
        (
            "role_2",
            "Department Admin",
            "DEPT_ADMIN",
            "Manages users and resources within their own department",
            PermissionSet::from_raw(vec![
                "user.read".to_string(),
                "user.create".to_string(),
                "user.update".to_string(),
                "dept.read".to_string(),
                "project.read".to_string(),
            ]),
            2,
            365,
        ),
        (
            "role_3",
            "Member",
            "USER",
            "Baseline access: browse users and projects",
            PermissionSet::from_raw(vec!["user.read".to_string(), "project.read".to_string()]),
            3,
            365,
        ),
        (
            "role_4",
            "Developer",
            "DEVELOPER",
            "Development features on top of baseline access",
            PermissionSet::from_raw(vec![
                "user.read".to_string(),
                "project.read".to_string(),
                "project.create".to_string(),
                "project.update".to_string(),
            ]),
            2,
            200,
        ),
    ];
    for (id, name, code, description, permissions, level, age_days) in roles {
        dir.roles.insert(Role {
            id: id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            description: description.to_string(),
            permissions,
            level,
            status: EntityStatus::Active,
            user_count: 0,
            created_at: now - Duration::days(age_days),
            updated_at: now,
        });
    }

    // Departments
    let departments = [
        (
            "dept_1",
            "Technology",
            "TECH",
            "Product development and system operations",
            None,
            "Bob Li",
            Some("user_2"),
            1,
            365,
        ),
        (
            "dept_2",
            "Product",
            "PROD",
            "Product planning and requirements analysis",
            None,
            "Carol Wang",
            Some("user_3"),
            1,
            365,
        ),
        (
            "dept_3",
            "Design",
            "DESIGN",
            "Product UI/UX design",
            Some("dept_2"),
            "Dave Zhao",
            Some("user_4"),
            2,
            300,
        ),
        (
            "dept_4",
            "Human Resources",
            "HR",
            "People operations",
            None,
            "Eve Qian",
            Some("user_5"),
            1,
            200,
        ),
    ];
    for (id, name, code, description, parent, manager, manager_id, level, age_days) in departments {
        dir.departments.insert(Department {
            id: id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            description: description.to_string(),
            parent_id: parent.map(str::to_string),
            manager: manager.to_string(),
            manager_id: manager_id.map(str::to_string),
            member_count: 0,
            level,
            status: EntityStatus::Active,
            created_at: now - Duration::days(age_days),
            updated_at: now,
        });
    }

    // Users; the resolved permission set is copied from the role at seed
    // time, exactly as the propagation engine would
    struct SeedUser {
        id: &'static str,
        employee_id: &'static str,
        name: &'static str,
        email: &'static str,
        phone: &'static str,
        department_id: &'static str,
        position: &'static str,
        role_id: &'static str,
        status: UserStatus,
        report_to_id: Option<&'static str>,
        age_days: i64,
        last_login_hours: Option<i64>,
        password: Option<&'static str>,
    }

    let users = [
        SeedUser {
            id: "user_1",
            employee_id: "U001",
            name: "Alice Chen",
            email: "alice.chen@company.com",
            phone: "13812345678",
            department_id: "dept_1",
            position: "Senior Frontend Engineer",
            role_id: "role_4",
            status: UserStatus::Active,
            report_to_id: Some("user_2"),
            age_days: 300,
            last_login_hours: Some(2),
            password: Some("dev12345"),
        },
        SeedUser {
            id: "user_2",
            employee_id: "U002",
            name: "Bob Li",
            email: "bob.li@company.com",
            phone: "13987654321",
            department_id: "dept_1",
            position: "Technical Director",
            role_id: "role_1",
            status: UserStatus::Active,
            report_to_id: Some("user_3"),
            age_days: 500,
            last_login_hours: Some(1),
            password: Some("admin123"),
        },
        SeedUser {
            id: "user_3",
            employee_id: "U003",
            name: "Carol Wang",
            email: "carol.wang@company.com",
            phone: "13555666777",
            department_id: "dept_2",
            position: "Product Director",
            role_id: "role_2",
            status: UserStatus::Active,
            report_to_id: None,
            age_days: 600,
            last_login_hours: Some(1),
            password: Some("carol123"),
        },
        SeedUser {
            id: "user_4",
            employee_id: "U004",
            name: "Dave Zhao",
            email: "dave.zhao@company.com",
            phone: "13666777888",
            department_id: "dept_3",
            position: "UI Designer",
            role_id: "role_3",
            status: UserStatus::Pending,
            report_to_id: Some("user_3"),
            age_days: 10,
            last_login_hours: None,
            password: None,
        },
        SeedUser {
            id: "user_5",
            employee_id: "U005",
            name: "Eve Qian",
            email: "eve.qian@company.com",
            phone: "13777888999",
            department_id: "dept_4",
            position: "HR Director",
            role_id: "role_2",
            status: UserStatus::Active,
            report_to_id: None,
            age_days: 400,
            last_login_hours: Some(24),
            password: None,
        },
    ];

    for seed in users {
        let role = dir
            .roles
            .get(seed.role_id)
            .cloned()
            .expect("seed role exists");
        let department = dir
            .departments
            .get(seed.department_id)
            .cloned()
            .expect("seed department exists");
        let report_to = seed
            .report_to_id
            .map(|id| users_name(id).to_string());
        let password_hash = seed
            .password
            .map(|p| User::hash_password(p).expect("seed password hash"))
            .unwrap_or_default();
        let created = now - Duration::days(seed.age_days);

        dir.users.insert(User {
            id: seed.id.to_string(),
            employee_id: seed.employee_id.to_string(),
            name: seed.name.to_string(),
            email: seed.email.to_string(),
            phone: seed.phone.to_string(),
            avatar: String::new(),
            department_id: department.id.clone(),
            department: department.name.clone(),
            position: seed.position.to_string(),
            role_id: role.id.clone(),
            role: role.name.clone(),
            permissions: role.permissions.clone(),
            status: seed.status,
            password_hash,
            last_login: seed.last_login_hours.map(|h| now - Duration::hours(h)),
            report_to,
            report_to_id: seed.report_to_id.map(str::to_string),
            join_date: created,
            created_at: created,
            updated_at: now,
        });
    }

    // Derived counters start consistent with the seeded rows
    let dept_ids: Vec<String> = dir.departments.values().map(|d| d.id.clone()).collect();
    for id in dept_ids {
        let count = dir
            .users
            .values()
            .filter(|u| u.department_id == id)
            .count() as u32;
        if let Some(dept) = dir.departments.get_mut(&id) {
            dept.member_count = count;
        }
    }
    let role_ids: Vec<String> = dir.roles.values().map(|r| r.id.clone()).collect();
    for id in role_ids {
        let count = dir.users.values().filter(|u| u.role_id == id).count() as u32;
        if let Some(role) = dir.roles.get_mut(&id) {
            role.user_count = count;
        }
    }

    dir.org_tree = org_tree();
    dir.report_relations = vec![
        relation("user_1", "user_2"),
        relation("user_2", "user_3"),
        relation("user_4", "user_3"),
    ];

    dir
}

fn users_name(id: &str) -> &'static str {
    match id {
        "user_1" => "Alice Chen",
        "user_2" => "Bob Li",
        "user_3" => "Carol Wang",
        "user_4" => "Dave Zhao",
        "user_5" => "Eve Qian",
        _ => "",
    }
}

fn relation(from: &str, to: &str) -> ReportRelation {
    ReportRelation {
        from: from.to_string(),
        to: to.to_string(),
        from_name: users_name(from).to_string(),
        to_name: users_name(to).to_string(),
    }
}

fn org_tree() -> Vec<OrgNode> {
    fn node(id: &str, name: &str, kind: OrgNodeKind, children: Vec<OrgNode>) -> OrgNode {
        OrgNode {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            children,
        }
    }

    use OrgNodeKind::{Company, Department, Team};
    vec![node(
        "company",
        "Headquarters",
        Company,
        vec![
            node(
                "dept_1",
                "Technology",
                Department,
                vec![
                    node("frontend", "Frontend Team", Team, vec![]),
                    node("backend", "Backend Team", Team, vec![]),
                    node("qa", "QA Team", Team, vec![]),
                ],
            ),
            node(
                "dept_2",
                "Product",
                Department,
                vec![
                    node("dept_3", "Design", Department, vec![]),
                    node("operations", "Product Operations", Team, vec![]),
                ],
            ),
            node("dept_4", "Human Resources", Department, vec![]),
        ],
    )]
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn release_store() -> ReleaseStore {
    let now = Utc::now();
    let releases = vec![
        Release {
            id: 1,
            version: "v2.1.0".to_string(),
            name: "User permission overhaul".to_string(),
            description: "Reworked role assignment and tightened permission checks".to_string(),
            release_date: date(2024, 1, 15),
            status: ReleaseStatus::Released,
            priority: ReleasePriority::High,
            developer: "Alice Chen".to_string(),
            test_status: TestStatus::Passed,
            rollback_version: None,
            created_at: now - Duration::days(40),
            updated_at: now - Duration::days(35),
        },
        Release {
            id: 2,
            version: "v2.0.8".to_string(),
            name: "Performance tuning".to_string(),
            description: "Faster page loads and trimmed response payloads".to_string(),
            release_date: date(2024, 1, 10),
            status: ReleaseStatus::Released,
            priority: ReleasePriority::Medium,
            developer: "Bob Li".to_string(),
            test_status: TestStatus::Passed,
            rollback_version: None,
            created_at: now - Duration::days(45),
            updated_at: now - Duration::days(40),
        },
        Release {
            id: 3,
            version: "v2.1.1".to_string(),
            name: "Bug fixes".to_string(),
            description: "Fixes for issues reported after v2.1.0".to_string(),
            release_date: date(2024, 1, 20),
            status: ReleaseStatus::InTesting,
            priority: ReleasePriority::High,
            developer: "Carol Wang".to_string(),
            test_status: TestStatus::Testing,
            rollback_version: None,
            created_at: now - Duration::days(35),
            updated_at: now - Duration::days(30),
        },
        Release {
            id: 4,
            version: "v2.0.7".to_string(),
            name: "UI polish".to_string(),
            description: "Visual cleanup across the admin pages".to_string(),
            release_date: date(2024, 1, 5),
            status: ReleaseStatus::RolledBack,
            priority: ReleasePriority::Low,
            developer: "Dave Zhao".to_string(),
            test_status: TestStatus::Passed,
            rollback_version: Some("v2.0.6".to_string()),
            created_at: now - Duration::days(50),
            updated_at: now - Duration::days(45),
        },
    ];

    let deployments = vec![
        Deployment {
            id: 1,
            environment: "production".to_string(),
            version: "v2.1.0".to_string(),
            deploy_time: now - Duration::days(35),
            status: DeploymentStatus::Succeeded,
            progress: 100,
            operator: "Alice Chen".to_string(),
            duration: "15m".to_string(),
            logs: vec![
                "Starting deployment...".to_string(),
                "Code sync complete".to_string(),
                "Database migration complete".to_string(),
                "Services restarted".to_string(),
                "Deployment succeeded".to_string(),
            ],
            created_at: now - Duration::days(35),
            updated_at: now - Duration::days(35),
        },
        Deployment {
            id: 2,
            environment: "testing".to_string(),
            version: "v2.1.1".to_string(),
            deploy_time: now - Duration::hours(6),
            status: DeploymentStatus::InProgress,
            progress: 65,
            operator: "Bob Li".to_string(),
            duration: "8m".to_string(),
            logs: vec![
                "Starting deployment...".to_string(),
                "Code sync complete".to_string(),
                "Database migration running...".to_string(),
            ],
            created_at: now - Duration::hours(6),
            updated_at: now - Duration::hours(6),
        },
        Deployment {
            id: 3,
            environment: "staging".to_string(),
            version: "v2.1.0".to_string(),
            deploy_time: now - Duration::days(36),
            status: DeploymentStatus::Succeeded,
            progress: 100,
            operator: "Carol Wang".to_string(),
            duration: "12m".to_string(),
            logs: vec![
                "Starting deployment...".to_string(),
                "Code sync complete".to_string(),
                "Services restarted".to_string(),
                "Deployment succeeded".to_string(),
            ],
            created_at: now - Duration::days(36),
            updated_at: now - Duration::days(36),
        },
    ];

    ReleaseStore::with_seed(releases, deployments)
}

fn project_store() -> ProjectStore {
    let now = Utc::now();
    let mut store = ProjectStore::new();

    store.projects.insert(Project {
        id: "proj_1".to_string(),
        name: "CRM System Upgrade".to_string(),
        description: "Upgrade the existing CRM with new features and a better UX".to_string(),
        progress: 75,
        status: ProjectStatus::Active,
        start_date: date(2024, 1, 15),
        end_date: date(2024, 3, 15),
        team_members: 8,
        tasks: TaskSummary {
            total: 24,
            completed: 18,
            pending: 6,
        },
        created_at: now - Duration::days(30),
        updated_at: now - Duration::days(2),
        created_by: "admin".to_string(),
        tags: vec!["crm".to_string(), "frontend".to_string(), "backend".to_string()],
    });
    store.projects.insert(Project {
        id: "proj_2".to_string(),
        name: "Mobile App".to_string(),
        description: "Companion mobile app for iOS and Android".to_string(),
        progress: 45,
        status: ProjectStatus::Active,
        start_date: date(2024, 2, 1),
        end_date: date(2024, 5, 1),
        team_members: 6,
        tasks: TaskSummary {
            total: 32,
            completed: 14,
            pending: 18,
        },
        created_at: now - Duration::days(20),
        updated_at: now - Duration::days(1),
        created_by: "admin".to_string(),
        tags: vec!["mobile".to_string(), "ios".to_string(), "android".to_string()],
    });
    store.projects.insert(Project {
        id: "proj_3".to_string(),
        name: "Data Analytics Platform".to_string(),
        description: "Realtime monitoring and reporting platform".to_string(),
        progress: 100,
        status: ProjectStatus::Completed,
        start_date: date(2023, 11, 1),
        end_date: date(2024, 1, 31),
        team_members: 5,
        tasks: TaskSummary {
            total: 18,
            completed: 18,
            pending: 0,
        },
        created_at: now - Duration::days(90),
        updated_at: now - Duration::days(40),
        created_by: "admin".to_string(),
        tags: vec!["analytics".to_string(), "reporting".to_string()],
    });

    store.milestones.insert(Milestone {
        id: "ms_1".to_string(),
        title: "UI design complete".to_string(),
        description: "All page designs signed off".to_string(),
        due_date: date(2024, 2, 15),
        status: MilestoneStatus::Completed,
        progress: 100,
        project_id: "proj_1".to_string(),
        created_at: now - Duration::days(30),
        updated_at: now - Duration::days(10),
        completed_at: Some(now - Duration::days(10)),
        assigned_to: Some("Dave Zhao".to_string()),
    });
    store.milestones.insert(Milestone {
        id: "ms_2".to_string(),
        title: "Backend API development".to_string(),
        description: "Core business logic and API endpoints".to_string(),
        due_date: date(2024, 2, 28),
        status: MilestoneStatus::Active,
        progress: 80,
        project_id: "proj_1".to_string(),
        created_at: now - Duration::days(30),
        updated_at: now - Duration::days(2),
        completed_at: None,
        assigned_to: Some("Alice Chen".to_string()),
    });
    store.milestones.insert(Milestone {
        id: "ms_3".to_string(),
        title: "Mobile prototype".to_string(),
        description: "Clickable prototype for the mobile app".to_string(),
        due_date: date(2024, 3, 10),
        status: MilestoneStatus::Active,
        progress: 60,
        project_id: "proj_2".to_string(),
        created_at: now - Duration::days(20),
        updated_at: now - Duration::days(1),
        completed_at: None,
        assigned_to: Some("Dave Zhao".to_string()),
    });

    store.code_reviews.insert(CodeReview {
        id: "cr_1".to_string(),
        title: "User management refactor".to_string(),
        author: "Alice Chen".to_string(),
        reviewer: "Bob Li".to_string(),
        status: ReviewStatus::Pending,
        lines_changed: 156,
        comments: 0,
        project_id: "proj_1".to_string(),
        branch_name: "feature/user-management".to_string(),
        commit_hash: "abc123def456".to_string(),
        description: "Restructure the user management module".to_string(),
        files_changed: vec![
            "src/components/UserManagement.tsx".to_string(),
            "src/services/userService.ts".to_string(),
        ],
        created_at: now - Duration::days(1),
        updated_at: now - Duration::days(1),
        approved_at: None,
    });
    store.code_reviews.insert(CodeReview {
        id: "cr_2".to_string(),
        title: "API response tuning".to_string(),
        author: "Carol Wang".to_string(),
        reviewer: "Dave Zhao".to_string(),
        status: ReviewStatus::InReview,
        lines_changed: 89,
        comments: 3,
        project_id: "proj_1".to_string(),
        branch_name: "feature/api-optimization".to_string(),
        commit_hash: "def456ghi789".to_string(),
        description: "Trim payloads and improve error handling".to_string(),
        files_changed: vec![
            "src/routes/api.js".to_string(),
            "src/middleware/errorHandler.js".to_string(),
        ],
        created_at: now - Duration::days(2),
        updated_at: now - Duration::days(1),
        approved_at: None,
    });
    store.code_reviews.insert(CodeReview {
        id: "cr_3".to_string(),
        title: "Query optimization".to_string(),
        author: "Eve Qian".to_string(),
        reviewer: "Bob Li".to_string(),
        status: ReviewStatus::Approved,
        lines_changed: 234,
        comments: 1,
        project_id: "proj_3".to_string(),
        branch_name: "feature/db-optimization".to_string(),
        commit_hash: "ghi789jkl012".to_string(),
        description: "Add indexes and cache hot queries".to_string(),
        files_changed: vec![
            "src/models/User.js".to_string(),
            "src/services/database.js".to_string(),
        ],
        created_at: now - Duration::days(3),
        updated_at: now - Duration::days(2),
        approved_at: Some(now - Duration::days(2)),
    });

    store.branches.insert(Branch {
        id: "br_1".to_string(),
        name: "main".to_string(),
        kind: BranchKind::Main,
        last_commit: now - Duration::hours(5),
        author: "Alice Chen".to_string(),
        status: BranchStatus::Active,
        commits: 156,
        project_id: "proj_1".to_string(),
        description: "Production branch".to_string(),
        created_at: now - Duration::days(30),
        updated_at: now - Duration::hours(5),
        last_commit_hash: "main123abc456".to_string(),
        is_protected: true,
    });
    store.branches.insert(Branch {
        id: "br_2".to_string(),
        name: "develop".to_string(),
        kind: BranchKind::Develop,
        last_commit: now - Duration::hours(8),
        author: "Bob Li".to_string(),
        status: BranchStatus::Active,
        commits: 89,
        project_id: "proj_1".to_string(),
        description: "Integration branch".to_string(),
        created_at: now - Duration::days(30),
        updated_at: now - Duration::hours(8),
        last_commit_hash: "develop456def789".to_string(),
        is_protected: true,
    });
    store.branches.insert(Branch {
        id: "br_3".to_string(),
        name: "feature/user-management".to_string(),
        kind: BranchKind::Feature,
        last_commit: now - Duration::days(1),
        author: "Carol Wang".to_string(),
        status: BranchStatus::Active,
        commits: 23,
        project_id: "proj_1".to_string(),
        description: "User management work".to_string(),
        created_at: now - Duration::days(10),
        updated_at: now - Duration::days(1),
        last_commit_hash: "feature789ghi012".to_string(),
        is_protected: false,
    });

    store
}

fn dashboard_store() -> DashboardStore {
    let now = Utc::now();

    fn card(key: &str, title: &str, value: i64, increase: f64) -> StatCard {
        StatCard {
            key: key.to_string(),
            title: title.to_string(),
            value,
            increase,
        }
    }

    fn application(
        id: u64,
        name: &str,
        region: &str,
        kind: &str,
        status: ApplicationStatus,
        hours_ago: i64,
        now: chrono::DateTime<Utc>,
    ) -> AccountApplication {
        AccountApplication {
            id,
            name: name.to_string(),
            region: region.to_string(),
            kind: kind.to_string(),
            status,
            create_time: now - Duration::hours(hours_ago),
        }
    }

    DashboardStore {
        cards: vec![
            card("accounts", "Promoter Accounts", 2846, 12.5),
            card("pendingReviews", "Pending Reviews", 152, -8.2),
            card("regions", "Active Regions", 178, 3.7),
            card("commission", "Monthly Commission", 284_690, 22.3),
        ],
        applications: vec![
            application(1, "Frank Sun", "Shanghai", "city", ApplicationStatus::Pending, 4, now),
            application(2, "Grace Zhou", "Beijing", "region", ApplicationStatus::Approved, 30, now),
            application(3, "Henry Wu", "Guangzhou", "city", ApplicationStatus::Pending, 50, now),
            application(4, "Iris Zheng", "Shenzhen", "region", ApplicationStatus::Rejected, 74, now),
            application(5, "Jack Feng", "Hangzhou", "city", ApplicationStatus::Approved, 96, now),
        ],
    }
}
