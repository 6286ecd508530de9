use crate::domain::{Category, Product};

struct Seed {
    id: &'static str,
    name: &'static str,
    name_bn: &'static str,
    price: u64,
    original_price: u64,
    images: [&'static str; 2],
    description: &'static str,
    description_bn: &'static str,
    sizes: &'static [&'static str],
    set_quantity: u32,
    tags: &'static [&'static str],
    featured: bool,
    is_new: bool,
    on_sale: bool,
}

const PRODUCTS: &[Seed] = &[
    Seed {
        id: "bangle-001",
        name: "Blue and White combination bangles",
        name_bn: "নীল ও হোয়াইট কম্বিনেশনের চুড়ি",
        price: 500,
        original_price: 550,
        images: ["./assets/images/image1.jpeg", "./assets/images/image11.jpeg"],
        description: "Elegant blue with excellent white bangles with delicate diamond pearl embellishments. Perfect for weddings and special occasions.",
        description_bn: "সূক্ষ নীল ও চমৎকার সাদা ডায়মন্ড পার্ল সজ্জা সহ মার্জিত পার্পেল এবং সাদা চুড়ি। বিবাহ এবং বিশেষ অনুষ্ঠানের জন্য উপযুক্ত।",
        sizes: &["24", "26", "28"],
        set_quantity: 4,
        tags: &["wedding", "purple", "white", "traditional"],
        featured: true,
        is_new: true,
        on_sale: true,
    },
    Seed {
        id: "bangle-002",
        name: "Trendy purple Thread Bangles",
        name_bn: "আধুনিক পার্পেল সুতার চুড়ি",
        price: 320,
        original_price: 0,
        images: ["./assets/images/image2.jpeg", "./assets/images/image21.jpeg"],
        description: "Beautiful handmade thread bangles in soft rose pink color. Lightweight and comfortable for daily wear.",
        description_bn: "নরম গোলাপি রঙে সুন্দর হাতে তৈরি সুতার চুড়ি। হালকা ওজন এবং প্রতিদিনের ব্যবহারের জন্য আরামদায়ক।",
        sizes: &["24", "26", "28"],
        set_quantity: 4,
        tags: &["casual", "purple", "thread", "handmade"],
        featured: true,
        is_new: false,
        on_sale: false,
    },
    Seed {
        id: "bangle-003",
        name: "Crystal Stone on Navy Blue Bangles",
        name_bn: "ক্রিস্টাল পাথরের নেভিব্লু চুড়ি",
        price: 630,
        original_price: 700,
        images: ["./assets/images/image3.jpeg", "./assets/images/image31.jpeg"],
        description: "Stunning crystal stone bangles that sparkle beautifully in light. Premium quality stones with secure settings.",
        description_bn: "অত্যাশ্চর্য ক্রিস্টাল পাথরের চুড়ি যা আলোতে সুন্দরভাবে ঝলমল করে। নিরাপদ সেটিং সহ প্রিমিয়াম মানের পাথর।",
        sizes: &["24", "26", "28"],
        set_quantity: 2,
        tags: &["party", "crystal", "premium", "sparkle"],
        featured: true,
        is_new: true,
        on_sale: true,
    },
    Seed {
        id: "bangle-004",
        name: "Aesthetic Black Bangles",
        name_bn: "নান্দনিক কালো চুড়ি",
        price: 420,
        original_price: 0,
        images: ["./assets/images/image4.jpeg", "./assets/images/image41.jpeg"],
        description: "Classic antique-finish copper bangles with intricate traditional patterns. Timeless elegance for any outfit.",
        description_bn: "জটিল ঐতিহ্যবাহী প্যাটার্ন সহ ক্লাসিক অ্যান্টিক-ফিনিশ তামার চুড়ি। যেকোনো পোশাকের জন্য চিরন্তন কমনীয়তা।",
        sizes: &["24", "26", "28"],
        set_quantity: 4,
        tags: &["aesthetic", "black", "traditional", "ethnic"],
        featured: false,
        is_new: false,
        on_sale: false,
    },
    Seed {
        id: "bangle-005",
        name: "Aesthetic Square bangle with Meenakari Enamel",
        name_bn: "নান্দনিক স্কয়ার মীনাকারি এনামেল চুড়ি",
        price: 650,
        original_price: 750,
        images: ["./assets/images/image5.jpeg", "./assets/images/image51.jpeg"],
        description: "Exquisite blue Meenakari enamel work bangles in vibrant colors. Traditional Rajasthani art form, handcrafted.",
        description_bn: "উজ্জ্বল নীল রঙে চমৎকার মীনাকারি এনামেল কাজের চুড়ি। ঐতিহ্যবাহী রাজস্থানী শিল্প, দক্ষ হাতে তৈরি।",
        sizes: &["24", "26"],
        set_quantity: 2,
        tags: &["meenakari", "colorful", "blue", "square", "rajasthani", "artisan"],
        featured: true,
        is_new: false,
        on_sale: true,
    },
    Seed {
        id: "bangle-006",
        name: "Modern Bllue bangle Set with golden stones",
        name_bn: "মডার্ন নীল চুড়ি সেট সোনালী পাথর সহ",
        price: 380,
        original_price: 0,
        images: ["./assets/images/image6.jpg", "./assets/images/image61.jpg"],
        description: "Trendy blue silk thread bangles with modern designs. Perfect blend of traditional craft and contemporary style.",
        description_bn: "আধুনিক ডিজাইনের সাথে ট্রেন্ডি নীল সিল্ক থ্রেড চুড়ি। ঐতিহ্যবাহী শিল্প এবং সমসাময়িক স্টাইলের নিখুঁত মিশ্রণ।",
        sizes: &["24", "26", "28"],
        set_quantity: 2,
        tags: &["silk", "trendy", "colorful", "modern"],
        featured: false,
        is_new: true,
        on_sale: false,
    },
];

pub(super) fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|seed| Product {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            name_bn: seed.name_bn.to_string(),
            price: seed.price,
            original_price: seed.original_price,
            image: seed.images[0].to_string(),
            gallery: seed.images.iter().map(|i| i.to_string()).collect(),
            category: "bangles".to_string(),
            description: seed.description.to_string(),
            description_bn: seed.description_bn.to_string(),
            sizes: seed.sizes.iter().map(|s| s.to_string()).collect(),
            set_quantity: seed.set_quantity,
            tags: seed.tags.iter().map(|t| t.to_string()).collect(),
            featured: seed.featured,
            in_stock: true,
            is_new: seed.is_new,
            on_sale: seed.on_sale,
        })
        .collect()
}

pub(super) fn categories() -> Vec<Category> {
    vec![
        Category::new("all", "All Products", "সব পণ্য", "✨"),
        Category::new("bangles", "Bangles", "চুড়ি", "💫"),
        Category::new("coming-soon", "Coming Soon", "শীঘ্রই আসছে", "🎁"),
    ]
}
