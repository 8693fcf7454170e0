//! Structural stylesheet
//!
//! All color and sizing values come from the theme token table
//! (`vitalboard_types::Theme`); this file only holds layout rules, so the
//! components stay free of presentation detail beyond class names.

pub const APP_CSS: &str = r#"
* { box-sizing: border-box; }
html, body {
  margin: 0;
  padding: 0;
  background: var(--bg);
  color: var(--text);
  font-family: system-ui, -apple-system, sans-serif;
  font-size: 14px;
  line-height: 1.5;
  min-height: 100%;
}

a { color: var(--accent); text-decoration: none; }

.app { display: flex; flex-direction: column; min-height: 100vh; }
.layout { display: flex; flex: 1; }
.content { flex: 1; padding: 24px; }

.header {
  padding: 12px 24px;
  border-bottom: 1px solid var(--border);
  background: var(--panel);
}
.logo { margin: 0; font-size: 18px; }
.subtitle { margin: 0; color: var(--text-muted); font-size: 12px; }

.sidebar {
  display: flex;
  flex-direction: column;
  width: var(--sidebar-width);
  background: var(--panel);
  border-right: 1px solid var(--border);
  transition: transform var(--transition);
}
.sidebar-brand {
  display: flex;
  align-items: center;
  gap: 10px;
  padding: 16px;
  border-bottom: 1px solid var(--border);
  color: var(--accent);
}
.sidebar-brand-name { margin: 0; font-size: 16px; color: var(--text); }
.sidebar-brand-tagline { margin: 0; font-size: 11px; color: var(--text-muted); }

.nav { flex: 1; overflow-y: auto; padding: 8px 0; }
.nav-section { padding: 8px 12px; }
.nav-section-title {
  margin: 0 0 4px;
  padding: 0 8px;
  font-size: 11px;
  font-weight: 600;
  letter-spacing: 0.06em;
  text-transform: uppercase;
  color: var(--text-muted);
}
.nav-list { list-style: none; margin: 0; padding: 0; }
.nav-item { margin: 2px 0; }

.sidebar-link {
  display: flex;
  align-items: center;
  gap: 10px;
  padding: 7px 8px;
  border-radius: 6px;
  border-left: 3px solid transparent;
  color: var(--text-muted);
}
.sidebar-link:hover { background: var(--surface-hover); color: var(--text); }
.sidebar-link.active {
  background: var(--accent-soft);
  border-left-color: var(--accent);
  color: var(--accent);
}
.sidebar-link-icon { display: inline-flex; }
.sidebar-link-label { flex: 1; }

.sidebar-footer { border-top: 1px solid var(--border); padding: 12px 16px; }
.sidebar-user { display: flex; align-items: center; gap: 10px; margin-bottom: 10px; }
.sidebar-user-badge {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 32px;
  height: 32px;
  border-radius: 50%;
  background: var(--accent);
  color: var(--panel);
  font-weight: 600;
}
.sidebar-user-details { flex: 1; min-width: 0; display: flex; flex-direction: column; }
.sidebar-user-name { font-weight: 600; }
.sidebar-user-email {
  color: var(--text-muted);
  font-size: 12px;
  overflow: hidden;
  text-overflow: ellipsis;
}
.sidebar-signout {
  background: none;
  border: 1px solid var(--border);
  border-radius: 6px;
  padding: 4px 8px;
  color: var(--negative);
  cursor: pointer;
}
.sidebar-signout:hover { background: var(--surface-hover); }
.sidebar-meta { color: var(--text-muted); font-size: 11px; }
.sidebar-meta-product { margin: 0 0 2px; }
.sidebar-meta-disclaimer { margin: 0; }

.sidebar-toggle { display: none; }
.sidebar-backdrop { display: none; }

/* Small viewports: panel is off-canvas until toggled */
@media (max-width: 768px) {
  .sidebar {
    position: fixed;
    top: 0;
    bottom: 0;
    left: 0;
    z-index: 20;
    transform: translateX(-100%);
  }
  .sidebar.sidebar-open { transform: translateX(0); }
  .sidebar-toggle {
    display: inline-flex;
    position: fixed;
    top: 10px;
    right: 10px;
    z-index: 30;
    width: 40px;
    height: 40px;
    align-items: center;
    justify-content: center;
    border: 1px solid var(--border);
    border-radius: 8px;
    background: var(--panel);
    color: var(--text);
    cursor: pointer;
  }
  .sidebar-backdrop {
    display: block;
    position: fixed;
    inset: 0;
    z-index: 10;
    background: rgba(0, 0, 0, 0.5);
  }
}

.page h2 { margin-top: 0; }
.hint { color: var(--text-muted); }

.empty-state {
  max-width: 480px;
  margin: 48px auto;
  text-align: center;
  color: var(--text-muted);
}
.empty-state-icon { color: var(--accent); }
.empty-state-title { color: var(--text); }
.empty-state-actions { margin-top: 24px; }
.btn {
  display: inline-flex;
  align-items: center;
  gap: 6px;
  padding: 8px 14px;
  border-radius: 8px;
}
.btn-primary { background: var(--accent-soft); color: var(--accent); }
"#;
