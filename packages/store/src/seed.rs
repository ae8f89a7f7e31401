//! Fixed sample catalog shown on the home page.
//!
//! These six recipes are a seed dataset, never written to storage and never
//! mutated; user submissions live separately under the `recipes` key.

use crate::models::Recipe;

fn sample(id: i64, title: &str, description: &str, source: &str, image_url: &str, tags: &[&str]) -> Recipe {
    Recipe {
        id,
        title: title.to_string(),
        description: description.to_string(),
        source: source.to_string(),
        image_url: image_url.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        instructions: Vec::new(),
        ingredients: Vec::new(),
        prep_time: None,
        cook_time: None,
        servings: None,
        media_type: Default::default(),
        media_url: None,
    }
}

/// The popular-recipes seed set.
pub fn popular_recipes() -> Vec<Recipe> {
    vec![
        sample(
            1,
            "Classic Spaghetti Carbonara",
            "A traditional Italian pasta dish with eggs, cheese, pancetta, and black pepper.",
            "Food Network",
            "https://www.giallozafferano.com/images/228-22832/Spaghetti-Carbonara_1200x800.jpg",
            &["Italian", "Pasta", "Quick"],
        ),
        sample(
            2,
            "Chicken Tikka Masala",
            "Grilled chunks of chicken enveloped in a creamy spiced tomato sauce.",
            "BBC Good Food",
            "https://www.seriouseats.com/thmb/DbQHUK2yNCALBnZE-H1M2AKLkok=/1500x0/filters:no_upscale():max_bytes(150000):strip_icc()/chicken-tikka-masala-for-the-grill-recipe-hero-2_1-cb493f49e30140efbffec162d5f2d1d7.JPG",
            &["Indian", "Curry", "Spicy"],
        ),
        sample(
            3,
            "French Ratatouille",
            "A bright and chunky summer vegetable stew, packed with the best of summer produce.",
            "Bon Appétit",
            "https://images.unsplash.com/photo-1572453800999-e8d2d1589b7c?q=80&w=1000&auto=format&fit=crop",
            &["French", "Vegetarian", "Healthy"],
        ),
        sample(
            4,
            "Classic Beef Burger",
            "Juicy homemade beef patties with all the classic burger toppings.",
            "Serious Eats",
            "https://www.seriouseats.com/thmb/e16lLOoVEix_JZTv7iNyAuWkPn8=/1500x0/filters:no_upscale():max_bytes(150000):strip_icc()/__opt__aboutcom__coeus__resources__content_migration__serious_eats__seriouseats.com__recipes__images__2014__09__20140918-jamie-olivers-comfort-food-insanity-burger-david-loftus-f7d9042bdc2a468fbbd50b10d467dafd.jpg",
            &["American", "Beef", "Grilling"],
        ),
        sample(
            5,
            "Homemade Pizza Margherita",
            "Simple and classic pizza with tomato sauce, fresh mozzarella, and basil.",
            "Jamie Oliver",
            "https://www.recipetineats.com/wp-content/uploads/2020/05/Pizza-Crust-without-yeast_5-SQ.jpg",
            &["Italian", "Pizza", "Vegetarian"],
        ),
        sample(
            6,
            "Thai Green Curry",
            "A fragrant Thai green curry with coconut milk, vegetables, and your choice of protein.",
            "Thai Food Online",
            "https://hot-thai-kitchen.com/wp-content/uploads/2022/11/green-curry-new-sq-2.jpg",
            &["Thai", "Curry", "Spicy"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::filter_recipes;

    #[test]
    fn test_seed_set_is_stable() {
        let recipes = popular_recipes();
        assert_eq!(recipes.len(), 6);
        // Ids are unique and fixed.
        let ids: Vec<i64> = recipes.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_seed_is_searchable() {
        let recipes = popular_recipes();
        let curries = filter_recipes(&recipes, "curry");
        assert_eq!(curries.len(), 2);
    }
}
