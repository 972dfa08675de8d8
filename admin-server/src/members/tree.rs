//! 权限树构建
//!
//! 把扁平的权限记录按 `parent_id` 组装成森林。纯函数，不修改输入；
//! 同一输入的两次调用产生结构完全相同的树 (同层保持输入顺序)。
//! 逐层线性匹配在最坏情况下是 O(n²)，对几十个节点的目录规模足够。

use shared::models::{Permission, PermissionNode};

/// 从扁平权限目录构建树；根节点是 `parent_id` 为空的记录
pub fn build_permission_tree(permissions: &[Permission]) -> Vec<PermissionNode> {
    children_of(permissions, None)
}

fn children_of(permissions: &[Permission], parent: Option<&str>) -> Vec<PermissionNode> {
    permissions
        .iter()
        .filter(|p| p.parent_id.as_deref() == parent)
        .map(|p| PermissionNode {
            permission: p.clone(),
            children: children_of(permissions, Some(&p.id)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed::permission_catalog;
    use shared::models::PermissionKind;

    fn perm(id: &str, parent: Option<&str>, level: u8) -> Permission {
        Permission {
            id: id.to_string(),
            name: id.to_string(),
            kind: PermissionKind::Menu,
            parent_id: parent.map(str::to_string),
            level,
        }
    }

    #[test]
    fn test_builds_forest_from_flat_records() {
        let flat = vec![
            perm("a", None, 1),
            perm("a.1", Some("a"), 2),
            perm("a.1.x", Some("a.1"), 3),
            perm("b", None, 1),
            perm("a.2", Some("a"), 2),
        ];

        let tree = build_permission_tree(&flat);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].permission.id, "a");
        assert_eq!(tree[1].permission.id, "b");

        let a_children: Vec<&str> = tree[0]
            .children
            .iter()
            .map(|n| n.permission.id.as_str())
            .collect();
        assert_eq!(a_children, vec!["a.1", "a.2"]);
        assert_eq!(tree[0].children[0].children[0].permission.id, "a.1.x");
        assert!(tree[1].children.is_empty());
    }

    #[test]
    fn test_deterministic_and_pure() {
        let flat = permission_catalog();
        let first = build_permission_tree(&flat);
        let second = build_permission_tree(&flat);
        assert_eq!(first, second);
        // 输入未被修改
        assert_eq!(flat, permission_catalog());
    }

    #[test]
    fn test_children_ignore_unknown_parents() {
        // 父节点不在目录中的记录不会出现在任何层
        let flat = vec![perm("root", None, 1), perm("orphan", Some("missing"), 2)];
        let tree = build_permission_tree(&flat);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].permission.id, "root");
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn test_seeded_catalog_shape() {
        let tree = build_permission_tree(&permission_catalog());
        let roots: Vec<&str> = tree.iter().map(|n| n.permission.id.as_str()).collect();
        assert_eq!(roots, vec!["system", "business"]);

        let system = &tree[0];
        let menus: Vec<&str> = system
            .children
            .iter()
            .map(|n| n.permission.id.as_str())
            .collect();
        assert_eq!(menus, vec!["user", "role", "dept"]);
        assert_eq!(system.children[0].children.len(), 4); // user.read/create/update/delete
    }
}
