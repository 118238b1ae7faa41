pub const SECTION_STYLES: &str = r#"
/* Progress bar */
.scroll-progress {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: 2px;
  z-index: 60;
  background: var(--primary);
  transform-origin: left;
}

/* Navbar */
.navbar {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 50;
  padding: var(--space-8) 0;
  transition: padding var(--transition-slow);
}

.navbar.condensed {
  padding: var(--space-4) 0;
}

.nav-inner {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-full);
  border: 1px solid transparent;
}

.navbar.condensed .nav-inner {
  background: var(--surface-glass);
  backdrop-filter: blur(24px);
  border-color: var(--border);
}

.logo {
  font-weight: 700;
  color: var(--text-primary);
}

.logo span {
  color: var(--primary);
  opacity: 0.5;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-8);
}

.nav-link {
  font-size: 0.7rem;
  text-transform: uppercase;
  letter-spacing: 0.15em;
}

.nav-link:hover {
  color: var(--primary);
}

.nav-mobile-toggles {
  display: none;
  gap: var(--space-4);
}

.mobile-menu {
  display: none;
  flex-direction: column;
  gap: var(--space-6);
  padding: var(--space-8);
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}

@media (max-width: 768px) {
  .nav-links { display: none; }
  .nav-mobile-toggles { display: flex; }
  .mobile-menu { display: flex; }
  .modal-content { grid-template-columns: 1fr; }
}

/* Sections */
.section {
  padding: var(--space-40) 0;
}

.section-title {
  font-size: 3rem;
  font-weight: 700;
  color: var(--text-primary);
  letter-spacing: -0.02em;
  margin-bottom: var(--space-24);
}

.hero {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  text-align: center;
  padding-top: var(--space-24);
}

.hero-badge {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  font-size: 0.65rem;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  margin-bottom: var(--space-8);
}

.pulse {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 50%;
  background: var(--accent);
}

.hero-title {
  font-size: clamp(3rem, 9vw, 7rem);
  font-weight: 700;
  line-height: 0.9;
  color: var(--text-primary);
  margin-bottom: var(--space-12);
}

.hero-title span {
  color: var(--text-tertiary);
}

.hero-bio {
  max-width: 42rem;
  margin: 0 auto var(--space-16);
  font-size: 1.2rem;
  font-weight: 300;
}

.hero-actions,
.social-links {
  display: flex;
  gap: var(--space-8);
  align-items: center;
  justify-content: center;
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: var(--space-8);
}

.project-card {
  cursor: pointer;
  display: flex;
  flex-direction: column;
}

.project-preview {
  aspect-ratio: 16 / 10;
  background: #18181B;
}

.project-preview img,
.project-preview video {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0.8;
}

.project-info {
  padding: var(--space-8);
}

.eyebrow {
  display: block;
  font-size: 0.65rem;
  font-weight: 700;
  color: var(--primary);
  text-transform: uppercase;
  letter-spacing: 0.2em;
  margin-bottom: var(--space-3);
}

.skill-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: var(--space-6);
}

.skill-card {
  padding: var(--space-8);
}

.skill-icon {
  font-size: 1.5rem;
  margin-bottom: var(--space-12);
}

.tech-strip {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-8);
  margin-top: var(--space-16);
}

.tech-item img {
  height: 2rem;
}

.about {
  text-align: center;
}

.quote {
  font-size: 2.5rem;
  line-height: 1.2;
  margin-bottom: var(--space-16);
}

.pillars {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: var(--space-12);
  border-top: 1px solid var(--border);
  padding-top: var(--space-16);
}

.contact-card {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: var(--space-16);
  padding: var(--space-16);
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: var(--space-8);
}

.footer {
  padding: var(--space-16) 0;
  border-top: 1px solid var(--border);
  text-align: center;
  font-size: 0.6rem;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.6em;
}
"#;
