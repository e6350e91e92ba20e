use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Apartment,
    House,
    Office,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Only(Category),
}

impl Filter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == category,
        }
    }
}

const FILTERS: [(Filter, &str); 4] = [
    (Filter::All, "All"),
    (Filter::Only(Category::Apartment), "Apartments"),
    (Filter::Only(Category::House), "Houses"),
    (Filter::Only(Category::Office), "Offices"),
];

struct Project {
    title: &'static str,
    image: &'static str,
    category: Category,
}

static PROJECTS: [Project; 6] = [
    Project { title: "Two-room flat, 54 m²", image: "/assets/projects/flat-54.webp", category: Category::Apartment },
    Project { title: "Country house, 140 m²", image: "/assets/projects/house-140.webp", category: Category::House },
    Project { title: "Studio, 28 m²", image: "/assets/projects/studio-28.webp", category: Category::Apartment },
    Project { title: "Dental clinic, 90 m²", image: "/assets/projects/clinic-90.webp", category: Category::Office },
    Project { title: "Townhouse, 110 m²", image: "/assets/projects/townhouse-110.webp", category: Category::House },
    Project { title: "Open-plan office, 200 m²", image: "/assets/projects/office-200.webp", category: Category::Office },
];

fn visible_projects(filter: Filter) -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(move |p| filter.matches(p.category))
}

#[function_component(ProjectFilters)]
pub fn project_filters() -> Html {
    let active = use_state_eq(|| Filter::All);

    let items = FILTERS.iter().map(|(filter, title)| {
        let filter = *filter;
        let onclick = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(filter))
        };
        html! {
            <button class={classes!("filter-item", (*active == filter).then(|| "active"))} {onclick}>
                {*title}
            </button>
        }
    });

    let projects = visible_projects(*active).map(|project| {
        html! {
            <figure class="project-card">
                <img src={project.image} alt={project.title} loading="lazy" />
                <figcaption>{project.title}</figcaption>
            </figure>
        }
    });

    html! {
        <section class="projects">
            <h2>{"Recent projects"}</h2>
            <div class="filters">{ for items }</div>
            <div class="projects-grid">{ for projects }</div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::{visible_projects, Category, Filter};

    #[test]
    fn all_shows_every_project() {
        assert_eq!(visible_projects(Filter::All).count(), 6);
    }

    #[test]
    fn category_filter_keeps_only_matches() {
        let houses: Vec<_> = visible_projects(Filter::Only(Category::House)).collect();
        assert_eq!(houses.len(), 2);
        assert!(houses.iter().all(|p| p.category == Category::House));
    }
}
