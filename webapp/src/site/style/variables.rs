// light values on :root, dark values when the root element carries the "dark" class
pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #6366F1;
  --primary-dark: #4F46E5;
  --accent: #10B981;
  --error: #EF4444;

  /* Light theme */
  --background: #F8FAFC;
  --surface: #FFFFFF;
  --surface-glass: rgba(255, 255, 255, 0.7);
  --border: rgba(0, 0, 0, 0.06);
  --text-primary: #0F172A;
  --text-secondary: #475569;
  --text-tertiary: #94A3B8;
  --inverse-bg: #000000;
  --inverse-text: #FFFFFF;

  /* Spacing */
  --space-1: 0.25rem;
  --space-2: 0.5rem;
  --space-3: 0.75rem;
  --space-4: 1rem;
  --space-6: 1.5rem;
  --space-8: 2rem;
  --space-12: 3rem;
  --space-16: 4rem;
  --space-24: 6rem;
  --space-40: 10rem;

  /* Radius */
  --radius-lg: 1rem;
  --radius-xl: 2rem;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.05);
  --shadow-lg: 0 10px 30px rgba(0, 0, 0, 0.15);

  /* Transitions */
  --transition-fast: 150ms;
  --transition-slow: 500ms;
}

:root.dark {
  --background: #050505;
  --surface: #111113;
  --surface-glass: rgba(17, 17, 19, 0.6);
  --border: rgba(255, 255, 255, 0.08);
  --text-primary: #FFFFFF;
  --text-secondary: #94A3B8;
  --text-tertiary: #475569;
  --inverse-bg: #FFFFFF;
  --inverse-text: #000000;
}
"#;
